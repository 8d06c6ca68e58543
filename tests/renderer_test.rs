use minijinja::Value;
use strata::context::Context;
use strata::error::Error;
use strata::renderer::{MiniJinjaRenderer, TemplateRenderer};
use tempfile::TempDir;

fn engine_over(templates: &TempDir, macros: &TempDir) -> MiniJinjaRenderer {
    MiniJinjaRenderer::new(templates.path(), macros.path())
}

#[test]
fn test_render_inline_template() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    let engine = engine_over(&templates, &macros);

    let mut context = Context::new();
    context.insert("name".to_string(), Value::from("test"));
    context.insert("value".to_string(), Value::from(42));

    let result = engine.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello test!");

    let result = engine.render("Value: {{ value }}", &context).unwrap();
    assert_eq!(result, "Value: 42");
}

#[test]
fn test_undefined_variable_is_an_error() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    let engine = engine_over(&templates, &macros);

    let context = Context::new();
    assert!(engine.render("{{ missing }}", &context).is_err());
}

#[test]
fn test_block_tags_trim_following_newline() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    let engine = engine_over(&templates, &macros);

    let context = Context::new();
    let result = engine.render("{% if true %}\nyes\n{% endif %}\n", &context).unwrap();
    assert_eq!(result, "yes\n");
}

#[test]
fn test_render_named_resolves_template_dir() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    std::fs::write(
        templates.path().join("main.tf.j2"),
        "region = \"{{ region }}\"\n",
    )
    .unwrap();
    let engine = engine_over(&templates, &macros);

    let mut context = Context::new();
    context.insert("region".to_string(), Value::from("us-east-1"));

    let rendered = engine.render_named("main.tf.j2", &context).unwrap();
    assert_eq!(rendered, "region = \"us-east-1\"\n");
}

#[test]
fn test_render_named_retains_failing_path() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    let engine = engine_over(&templates, &macros);

    match engine.render_named("missing.tf.j2", &Context::new()) {
        Err(Error::TemplateRenderError { path, .. }) => assert_eq!(path, "missing.tf.j2"),
        _ => panic!("Expected TemplateRenderError variant"),
    }
}

#[test]
fn test_templates_can_import_from_macro_dir() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    std::fs::write(
        macros.path().join("helpers.j2"),
        "{% macro quote(v) %}\"{{ v }}\"{% endmacro %}",
    )
    .unwrap();
    std::fs::write(
        templates.path().join("main.tf.j2"),
        "{% from \"helpers.j2\" import quote %}region = {{ quote(region) }}\n",
    )
    .unwrap();
    let engine = engine_over(&templates, &macros);

    let mut context = Context::new();
    context.insert("region".to_string(), Value::from("us-east-1"));

    let rendered = engine.render_named("main.tf.j2", &context).unwrap();
    assert_eq!(rendered, "region = \"us-east-1\"\n");
}

#[test]
fn test_exports_returns_macros_and_variables() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    std::fs::write(
        macros.path().join("helpers.j2"),
        "{% macro greet(name) %}hi {{ name }}{% endmacro %}\n{% set visible = \"yes\" %}\n{% set _private = \"no\" %}\n",
    )
    .unwrap();
    let engine = engine_over(&templates, &macros);

    let exports = engine.exports("helpers.j2").unwrap();
    let names: Vec<&str> = exports.iter().map(|(name, _)| name.as_str()).collect();

    // The renderer reports everything; visibility filtering happens at
    // injection time.
    assert!(names.contains(&"greet"));
    assert!(names.contains(&"visible"));
    assert!(names.contains(&"_private"));
}

#[test]
fn test_exported_macro_is_callable_through_context() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    std::fs::write(
        macros.path().join("helpers.j2"),
        "{% macro greet(name) %}hi {{ name }}{% endmacro %}",
    )
    .unwrap();
    let engine = engine_over(&templates, &macros);

    let mut context = Context::new();
    for (name, value) in engine.exports("helpers.j2").unwrap() {
        context.insert(name, value);
    }

    let rendered = engine.render("{{ greet(\"world\") }}", &context).unwrap();
    assert_eq!(rendered, "hi world");
}

#[test]
fn test_exports_retains_failing_path() {
    let templates = TempDir::new().unwrap();
    let macros = TempDir::new().unwrap();
    std::fs::write(macros.path().join("broken.j2"), "{% macro oops(").unwrap();
    let engine = engine_over(&templates, &macros);

    match engine.exports("broken.j2") {
        Err(Error::MacroLoadError { path, .. }) => assert_eq!(path, "broken.j2"),
        _ => panic!("Expected MacroLoadError variant"),
    }
}
