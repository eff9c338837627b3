use std::sync::OnceLock;

use xmlmap::{AdapterConfig, Field, FieldValue, Mappable, Schema, Suffix, Tree};

struct ComponenteAvaliacao {
    nome: String,
    peso: i32,
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

struct Fuc {
    codigo: String,
    nome: String,
    ects: f64,
    observacoes: String,
    avaliacao: Vec<ComponenteAvaliacao>,
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

fn componente(nome: &str, peso: i32) -> ComponenteAvaliacao {
    ComponenteAvaliacao {
        nome: nome.to_string(),
        peso,
    }
}

fn fuc() -> Fuc {
    Fuc {
        codigo: "M4310".to_string(),
        nome: "X".to_string(),
        ects: 6.0,
        observacoes: "la la...".to_string(),
        avaliacao: vec![componente("Quizzes", 20), componente("Projeto", 80)],
    }
}

#[test]
fn test_map_fuc() {
    let mut tree = Tree::new();
    let root = tree.map(&fuc()).unwrap();

    assert_eq!(tree.name(root), "fuc");
    assert_eq!(tree.attribute(root, "codigo"), Some("M4310"));
    let nome = tree.query(root, "fuc/nome_fuc");
    assert_eq!(nome.len(), 1);
    assert_eq!(tree.text_str(nome[0]), Some("X"));

    let componentes = tree.query(root, "fuc/componenteavaliacao");
    let pesos = componentes
        .iter()
        .map(|node| {
            (
                tree.attribute(*node, "nome").unwrap(),
                tree.attribute(*node, "peso").unwrap(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(pesos, vec![("Quizzes", "20%"), ("Projeto", "80%")]);
    assert!(tree.query(root, "fuc/observacoes").is_empty());
}

#[test]
fn test_map_fuc_rendered() {
    let mut tree = Tree::new();
    let root = tree.map(&fuc()).unwrap();
    insta::assert_snapshot!(tree.to_document_string(root), @r###"
    <?xml version="1.0" encoding="UTF-8"?>
    <fuc codigo="M4310">
      <nome_fuc>
        X
      </nome_fuc>
      <ects>
        6.0
      </ects>
      <componenteavaliacao nome="Quizzes" peso="20%"/>
      <componenteavaliacao nome="Projeto" peso="80%"/>
    </fuc>
    "###);
}

#[test]
fn test_attribute_only_value() {
    let mut tree = Tree::new();
    let root = tree.map(&componente("Quizzes", 20)).unwrap();
    assert_eq!(
        tree.render(root),
        "<componenteavaliacao nome=\"Quizzes\" peso=\"20%\"/>\n"
    );
}

struct Nota {
    valor: Option<i64>,
    aprovado: bool,
    componentes: Vec<Option<ComponenteAvaliacao>>,
}

impl Mappable for Nota {
    fn schema(&self) -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Nota")
                .name("nota")
                .field(Field::attribute("valor"))
                .field(Field::attribute("aprovado"))
                .field(Field::element("componentes"))
                .adapter(
                    AdapterConfig::default()
                        .with_sort_children_by_name(true)
                        .with_remove_duplicates(true)
                        .with_tag_rename("componenteavaliacao", "componente"),
                )
                .build()
        })
    }

    fn field(&self, id: &str) -> FieldValue<'_> {
        match id {
            "valor" => self.valor.into(),
            "aprovado" => self.aprovado.into(),
            "componentes" => FieldValue::Sequence(
                self.componentes
                    .iter()
                    .map(|c| c.as_ref().map(|c| c as &dyn Mappable))
                    .collect(),
            ),
            _ => FieldValue::Absent,
        }
    }
}

#[test]
fn test_type_level_adapter() {
    let nota = Nota {
        valor: None,
        aprovado: true,
        componentes: vec![
            Some(componente("Projeto", 80)),
            None,
            Some(componente("Projeto", 80)),
            Some(componente("Quizzes", 20)),
        ],
    };
    let mut tree = Tree::new();
    let root = tree.map(&nota).unwrap();
    insta::assert_snapshot!(tree.render(root), @r###"
    <nota aprovado="true">
      <componente nome="Projeto" peso="80%"/>
      <componente nome="Quizzes" peso="20%"/>
    </nota>
    "###);
}

#[test]
fn test_mapped_tree_is_editable() {
    let mut tree = Tree::new();
    let root = tree.map(&fuc()).unwrap();

    tree.rename_global_entity(root, "componenteavaliacao", "componente");
    tree.rename_global_attribute(root, "componente", "peso", "weight")
        .unwrap();
    tree.remove_global_entity(root, "ects");

    let componentes = tree.query(root, "/fuc/componente");
    assert_eq!(componentes.len(), 2);
    assert_eq!(tree.attribute(componentes[0], "weight"), Some("20%"));
    assert!(tree.query(root, "/fuc/ects").is_empty());
}
