//! The study plan dataset rendered by the binary.
use std::sync::OnceLock;

use xmlmap::{Field, FieldValue, Mappable, Schema, Suffix};

pub struct Plano {
    pub curso: String,
    pub fucs: Vec<Fuc>,
}

pub struct Fuc {
    pub codigo: String,
    pub nome: String,
    pub ects: f64,
    pub observacoes: String,
    pub avaliacao: Vec<ComponenteAvaliacao>,
}

pub struct ComponenteAvaliacao {
    pub nome: String,
    pub peso: u8,
}

impl Mappable for Plano {
    fn schema(&self) -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder_for::<Plano>()
                .field(Field::element("curso"))
                .field(Field::element("fucs"))
                .build()
        })
    }

    fn field(&self, id: &str) -> FieldValue<'_> {
        match id {
            "curso" => (&self.curso).into(),
            "fucs" => FieldValue::sequence(&self.fucs),
            _ => FieldValue::Absent,
        }
    }
}

impl Mappable for Fuc {
    fn schema(&self) -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder_for::<Fuc>()
                .field(Field::attribute("codigo"))
                .field(Field::element("nome").rename("nome_fuc"))
                .field(Field::element("ects"))
                .field(Field::element("observacoes").exclude())
                .field(Field::element("avaliacao"))
                .order(["nome", "ects", "codigo", "avaliacao"])
                .build()
        })
    }

    fn field(&self, id: &str) -> FieldValue<'_> {
        match id {
            "codigo" => (&self.codigo).into(),
            "nome" => (&self.nome).into(),
            "ects" => self.ects.into(),
            "observacoes" => (&self.observacoes).into(),
            "avaliacao" => FieldValue::sequence(&self.avaliacao),
            _ => FieldValue::Absent,
        }
    }
}

impl Mappable for ComponenteAvaliacao {
    fn schema(&self) -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder_for::<ComponenteAvaliacao>()
                .field(Field::attribute("nome"))
                .field(Field::attribute("peso").transform(Suffix("%")))
                .build()
        })
    }

    fn field(&self, id: &str) -> FieldValue<'_> {
        match id {
            "nome" => (&self.nome).into(),
            "peso" => self.peso.into(),
            _ => FieldValue::Absent,
        }
    }
}

fn componente(nome: &str, peso: u8) -> ComponenteAvaliacao {
    ComponenteAvaliacao {
        nome: nome.to_string(),
        peso,
    }
}

pub fn sample() -> Plano {
    Plano {
        curso: "Engenharia Informatica".to_string(),
        fucs: vec![
            Fuc {
                codigo: "M4310".to_string(),
                nome: "Programação Avançada".to_string(),
                ects: 6.0,
                observacoes: "la la...".to_string(),
                avaliacao: vec![componente("Quizzes", 20), componente("Projeto", 80)],
            },
            Fuc {
                codigo: "34568".to_string(),
                nome: "Dissertação".to_string(),
                ects: 42.0,
                observacoes: "la la...".to_string(),
                avaliacao: vec![
                    componente("Dissertacao", 60),
                    componente("Apresentacao", 20),
                    componente("Discussao", 20),
                ],
            },
        ],
    }
}
