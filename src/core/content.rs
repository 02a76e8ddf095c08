//! Static content of the course landing page
//!
//! Everything the page renders lives here as `'static` tables, so the view
//! layer only arranges markup and the content can be checked by tests.

use serde::Serialize;

/// Name of the course, repeated in several headings
pub const COURSE_NAME: &str = "TUDO NO MOLDE F1";

/// Instructor name
pub const INSTRUCTOR: &str = "Ingrid Pena";

/// Public canonical address of the page
pub const SITE_URL: &str = "https://tudonomoldef1.com.br/";

/// Checkout page of the course
pub const CHECKOUT_URL: &str = "https://pay.kiwify.com.br/iOJCPvL";

/// WhatsApp contact link
pub const WHATSAPP_URL: &str = "https://wa.me/5519990152578";

/// Hero block at the top of the page
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub subtitle: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
    pub cta: &'static str,
}

pub const HERO: Hero = Hero {
    subtitle: "Instrutora Ingrid Pena",
    quote: "“Essa não é só mais uma técnica… é o método que vai te fazer dominar o Molde F1 do zero à perfeição!”",
    image: "/ingrid.jpeg",
    cta: "GARANTIR MINHA VAGA",
};

/// Content section with a pair of photos
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub text: &'static str,
    pub extra: &'static str,
    pub images: [&'static str; 2],
}

pub const SECTIONS: [Section; 4] = [
    Section {
        title: "O que você encontrará no",
        text: "Estrututra com naturalidade ",
        extra: "Gravação profissional e foco no detalhe",
        images: ["/unhas1.jpeg", "/unhas2.jpeg"],
    },
    Section {
        title: "Aprenda a escolher o molde ideal",
        text: "Preparo correto da unha com encaixe perfeito do molde F1",
        extra: "Aprenda a quantidade correta de produto no molde F1",
        images: ["/unhas3.jpeg", "/unhas4.jpeg"],
    },
    Section {
        title: "Estrutura no molde F1",
        text: "Estrutura profissional com durabilidade e resistência",
        extra: "Redução de tempo em mesa e dominino total do molde F1",
        images: ["/unhas5.jpeg", "/unhas6.jpeg"],
    },
    Section {
        title: "Finalização de altíssimo padrão",
        text: "Acabamento fino com pouco lixamento",
        extra: "Estrutura fina e resistente",
        images: ["/unhas7.jpeg", "/unhas8.jpeg"],
    },
];

/// Side of the timeline line a module card sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn css_class(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One course module on the timeline
#[derive(Debug, Clone, Copy)]
pub struct Module {
    pub title: &'static str,
    pub topics: &'static [&'static str],
    pub side: Side,
    /// The bonus module is highlighted by the timeline band
    pub bonus: bool,
}

impl Module {
    pub fn css_class(&self) -> String {
        if self.bonus {
            format!("timeline-item {} bonus", self.side.css_class())
        } else {
            format!("timeline-item {}", self.side.css_class())
        }
    }
}

/// Selector of the bonus module inside the timeline
pub const BONUS_SELECTOR: &str = ".timeline-item.bonus";

pub const MODULES: [Module; 7] = [
    Module {
        title: "Módulo 1 – Fundamentos:",
        topics: &[
            "Boas-vindas e apresentação",
            "Produtos, materiais e teoria do molde",
            "Tipos de unhas, teoria da estrutura no molde",
        ],
        side: Side::Left,
        bonus: false,
    },
    Module {
        title: "Módulo 2 – Preparação:",
        topics: &[
            "Escolha do molde ideal",
            "Preparação física e química",
            "Prática em diferentes tipos de unhas",
        ],
        side: Side::Right,
        bonus: false,
    },
    Module {
        title: "Módulo 3 – Aplicação:",
        topics: &[
            "Alongamento formato Quadrado",
            "Alongamento formato Almond",
            "Aplicação completa passo a passo",
        ],
        side: Side::Left,
        bonus: false,
    },
    Module {
        title: "Módulo 4 – Manutenção:",
        topics: &["Manutenção Almond", "Manutenção Quadrado"],
        side: Side::Right,
        bonus: false,
    },
    Module {
        title: "Módulo 5 – Lixamento:",
        topics: &["Lixamento técnico detalhado"],
        side: Side::Left,
        bonus: false,
    },
    Module {
        title: "Módulo 6 – Blindagem e Banho de Gel:",
        topics: &[
            "Aplicação e manutenção de Blindagem",
            "Aplicação e manutenção de Banho de Gel",
        ],
        side: Side::Right,
        bonus: false,
    },
    Module {
        title: "Módulo (Bonus):",
        topics: &[
            "4 tipos de reversa transparente",
            "Finalizações de nail art que mais vende",
            "Esmaltação em gel",
            "Aula de fotografia de unhas",
            "Posicionamento no Instagram",
            "Ficha de anamnese",
        ],
        side: Side::Left,
        bonus: true,
    },
];

/// Instructor biography paragraphs
pub const BIO_IMAGE: &str = "/ingrid3.png";

pub const BIO: [&str; 4] = [
    "Tenho 26 anos, sou cristã, esposa e mãe.",
    "Sou manicure desde os 12 anos e, desde o início, sempre busquei aprimorar meus resultados e minha técnica.",
    "Por muito tempo senti falta de um curso que fosse realmente didático, simples e direto, que tornasse o aprendizado leve e prático e foi dessa necessidade que nasceu o Tudo no Molde F1.",
    "Quando decidi criar essa técnica, meu maior objetivo era desenvolver algo simples, funcional e acessível. Depois de um ano e meio de estudos e testes, o Tudo no Molde F1 se tornou uma realidade e em menos de um ano, já transformou a jornada de mais de 500 alunas, que hoje vivem uma nova fase na profissão, com resultados mais naturais, seguros e de alto padrão.",
];

/// Testimonial screenshots shown by the carousel
pub const TESTIMONIALS: [&str; 6] = [
    "/Depoimento1.jpeg",
    "/Depoimento2.jpeg",
    "/Depoimento3.jpeg",
    "/Depoimento4.jpeg",
    "/Depoimento5.jpeg",
    "/Depoimento6.jpeg",
];

/// Pricing block
#[derive(Debug, Clone, Copy)]
pub struct Offer {
    pub badge: &'static str,
    pub old_price: &'static str,
    pub price: &'static str,
    pub installments: &'static str,
    pub note: &'static str,
    pub cta: &'static str,
    /// Numeric price for structured data
    pub price_value: &'static str,
    pub currency: &'static str,
}

pub const OFFER: Offer = Offer {
    badge: "Oferta limitada 24h",
    old_price: "R$ 1.497,00",
    price: "997",
    installments: "103,11",
    note: "Promoção de lançamento: de R$ 1.497 por R$ 997, válida por 24 horas.",
    cta: "QUERO COMEÇAR AGORA",
    price_value: "997.00",
    currency: "BRL",
};

/// Frequently asked question
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "Para quem é este curso?",
        answer: "Para manicures e nail designers iniciantes ou que ja atuam na area com procedimentos em gel.",
    },
    Faq {
        question: "Preciso de experiência prévia?",
        answer: "Conhecimento básico ajuda, mas o método é direto e prático. Com treino você aplica em clientes rapidamente.",
    },
    Faq {
        question: "Como recebo o acesso?",
        answer: "O acesso é liberado imediatamente após a confirmação do pagamento. Você recebe um e-mail com as instruções.",
    },
    Faq {
        question: "Quanto tempo tenho de Acesso?",
        answer: "O tempo de acesso ao curso gravado é de 6 meses.",
    },
    Faq {
        question: "Tem certificado?",
        answer: "Sim, ao concluir as aulas você emite seu certificado digital.",
    },
    Faq {
        question: "E se eu não gostar?",
        answer: "Você tem 7 dias de garantia incondicional para pedir reembolso se não curtir o conteúdo.",
    },
];

/// Guarantee seal
pub const GUARANTEE_IMAGE: &str = "/garantia.png";
pub const GUARANTEE_DAYS: u32 = 7;

/// Icon of the WhatsApp contact button
pub const WHATSAPP_ICON: &str = "/zap.png";

/// Page description used by the meta tags
pub const DESCRIPTION: &str = "Curso Tudo no Molde F1 com a instrutora Ingrid Pena: domine o alongamento no Molde F1 do zero à perfeição.";

#[derive(Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
struct CourseOffer {
    #[serde(rename = "@type")]
    kind: &'static str,
    price: &'static str,
    #[serde(rename = "priceCurrency")]
    price_currency: &'static str,
    url: &'static str,
    category: &'static str,
}

#[derive(Serialize)]
struct CourseJsonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    url: &'static str,
    provider: Organization,
    offers: CourseOffer,
    teaches: Vec<&'static str>,
}

/// schema.org `Course` structured data for search engines
pub fn course_json_ld() -> String {
    let data = CourseJsonLd {
        context: "https://schema.org",
        kind: "Course",
        name: COURSE_NAME,
        description: DESCRIPTION,
        url: SITE_URL,
        provider: Organization {
            kind: "Person",
            name: INSTRUCTOR,
        },
        offers: CourseOffer {
            kind: "Offer",
            price: OFFER.price_value,
            price_currency: OFFER.currency,
            url: CHECKOUT_URL,
            category: "Paid",
        },
        teaches: MODULES.iter().map(|module| module.title).collect(),
    };

    // Only static strings are serialized, so this cannot fail
    serde_json::to_string(&data).unwrap_or_default()
}
