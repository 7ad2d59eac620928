//! Display text for personal numbers and personal years.
//!
//! Lookups never fail: numbers outside the table fall back to a default row
//! (9 for personal numbers, 1 for personal years).

use serde::Serialize;

const NUMBER_FALLBACK: u32 = 9;
const YEAR_FALLBACK: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalYearMeaning {
    pub year: u32,
    pub title: &'static str,
    pub theme: &'static str,
}

pub static NUMBER_MEANINGS: [NumberMeaning; 12] = [
    NumberMeaning {
        number: 1,
        title: "O Líder",
        description: "Independência, iniciativa e pioneirismo. Nasceu para abrir caminhos.",
    },
    NumberMeaning {
        number: 2,
        title: "O Diplomata",
        description: "Cooperação, sensibilidade e parceria. Busca harmonia nas relações.",
    },
    NumberMeaning {
        number: 3,
        title: "O Comunicador",
        description: "Criatividade, expressão e otimismo. Inspira pela palavra e pela arte.",
    },
    NumberMeaning {
        number: 4,
        title: "O Construtor",
        description: "Estabilidade, disciplina e trabalho. Transforma planos em bases sólidas.",
    },
    NumberMeaning {
        number: 5,
        title: "O Aventureiro",
        description: "Liberdade, mudança e curiosidade. Aprende experimentando o mundo.",
    },
    NumberMeaning {
        number: 6,
        title: "O Cuidador",
        description: "Responsabilidade, família e amor. Encontra propósito em proteger.",
    },
    NumberMeaning {
        number: 7,
        title: "O Sábio",
        description: "Introspecção, análise e espiritualidade. Busca a verdade por trás das aparências.",
    },
    NumberMeaning {
        number: 8,
        title: "O Realizador",
        description: "Ambição, poder e abundância material. Tem talento para conquistar.",
    },
    NumberMeaning {
        number: 9,
        title: "O Humanitário",
        description: "Compaixão, generosidade e encerramento de ciclos. Vive para o coletivo.",
    },
    NumberMeaning {
        number: 11,
        title: "O Mestre Intuitivo",
        description: "Número mestre da inspiração e da intuição elevada. Ilumina o caminho dos outros.",
    },
    NumberMeaning {
        number: 22,
        title: "O Mestre Construtor",
        description: "Número mestre que une grandes visões e realização prática.",
    },
    NumberMeaning {
        number: 33,
        title: "O Mestre Professor",
        description: "Número mestre do amor incondicional, da cura e do ensino.",
    },
];

#[rustfmt::skip]
pub static PERSONAL_YEAR_MEANINGS: [PersonalYearMeaning; 9] = [
    PersonalYearMeaning { year: 1, title: "Ano de Inícios", theme: "Novos começos, plantar sementes e tomar iniciativa." },
    PersonalYearMeaning { year: 2, title: "Ano de Parcerias", theme: "Paciência, cooperação e relacionamentos." },
    PersonalYearMeaning { year: 3, title: "Ano de Expressão", theme: "Criatividade, comunicação e vida social." },
    PersonalYearMeaning { year: 4, title: "Ano de Construção", theme: "Trabalho, organização e bases sólidas." },
    PersonalYearMeaning { year: 5, title: "Ano de Mudanças", theme: "Liberdade, viagens e transformações inesperadas." },
    PersonalYearMeaning { year: 6, title: "Ano de Responsabilidade", theme: "Família, lar e compromissos afetivos." },
    PersonalYearMeaning { year: 7, title: "Ano de Reflexão", theme: "Estudo, autoconhecimento e espiritualidade." },
    PersonalYearMeaning { year: 8, title: "Ano de Colheita", theme: "Conquistas materiais, carreira e reconhecimento." },
    PersonalYearMeaning { year: 9, title: "Ano de Conclusão", theme: "Encerramentos, desapego e preparação para um novo ciclo." },
];

fn find_number(n: u32) -> Option<&'static NumberMeaning> {
    NUMBER_MEANINGS.iter().find(|m| m.number == n)
}

fn find_year(n: u32) -> Option<&'static PersonalYearMeaning> {
    PERSONAL_YEAR_MEANINGS.iter().find(|m| m.year == n)
}

pub fn number_meaning(n: u32) -> &'static NumberMeaning {
    find_number(n).unwrap_or_else(|| {
        log::debug!("no meaning for personal number {}, using {}", n, NUMBER_FALLBACK);
        &NUMBER_MEANINGS[8]
    })
}

pub fn personal_year_meaning(n: u32) -> &'static PersonalYearMeaning {
    find_year(n).unwrap_or_else(|| {
        log::debug!("no meaning for personal year {}, using {}", n, YEAR_FALLBACK);
        &PERSONAL_YEAR_MEANINGS[0]
    })
}
