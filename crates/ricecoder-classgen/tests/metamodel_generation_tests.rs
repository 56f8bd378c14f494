//! Integration tests driving class templates from a field metamodel
//! Tests the append-then-generate flow used by code generation callers

use ricecoder_classgen::CodeTemplate;

/// Minimal field description as a caller would supply it
struct FieldSpec {
    name: &'static str,
    type_name: &'static str,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "id", type_name: "int" },
    FieldSpec { name: "title", type_name: "string" },
    FieldSpec { name: "price", type_name: "decimal" },
];

const PRODUCT_TEMPLATE: &str = "\
Generated product entity template.
#
namespace Shop.Entities
{
    public class Product : IEntity
    {
        @FIELDS@

        public Product()
        {
            @INIT@
        }
    }
}
#end
";

fn populate(template: &mut CodeTemplate) {
    for field in FIELDS {
        template.append_line(
            "@FIELDS@",
            &format!("public {} {};", field.type_name, field.name),
        );
        template.append("@INIT@", &format!("{} = default;\n", field.name));
    }
}

/// Test generation of a class from the field list
#[test]
fn test_generate_from_fields() {
    let mut template = CodeTemplate::from_text(PRODUCT_TEMPLATE).unwrap();
    assert_eq!(template.namespace_name(), "Shop.Entities");
    assert_eq!(template.class_name(), "Product");

    populate(&mut template);

    let expected = "namespace Shop.Entities
{
    public class Product : IEntity
    {
        public int id;
        public string title;
        public decimal price;

        public Product()
        {
            id = default;
            title = default;
            price = default;
        }
    }
}";
    assert_eq!(template.generate(), expected);
}

/// Test that generation output is stable for golden-file comparison
#[test]
fn test_generation_is_stable() {
    let mut first = CodeTemplate::from_text(PRODUCT_TEMPLATE).unwrap();
    let mut second = CodeTemplate::from_text(PRODUCT_TEMPLATE).unwrap();
    populate(&mut first);
    populate(&mut second);

    assert_eq!(first.generate(), second.generate());
    assert_eq!(first.generate(), first.generate());
}

/// Test generation with some tokens still empty
#[test]
fn test_partial_population() {
    let mut template = CodeTemplate::from_text(PRODUCT_TEMPLATE).unwrap();
    template.append_line("@FIELDS@", "public int id;");

    let output = template.generate();
    assert!(output.contains("        public int id;"));
    // @INIT@ was never appended, so the key is left in place.
    assert!(output.contains("            @INIT@"));
}

/// Test that generation keeps working after more tokens are appended
#[test]
fn test_generate_between_appends() {
    let mut template = CodeTemplate::from_text(PRODUCT_TEMPLATE).unwrap();
    template.append_line("@FIELDS@", "public int id;");
    let before = template.generate();

    template.append_line("@FIELDS@", "public string title;");
    let after = template.generate();

    assert_ne!(before, after);
    assert!(after.contains("        public int id;\n        public string title;"));
}
