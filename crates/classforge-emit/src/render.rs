//! Class source rendering.
//!
//! A class descriptor is substituted into [`CLASS_TEMPLATE`]. Each section renders to
//! an empty string when the descriptor has nothing for it, so optional members leave
//! no blank lines behind. Output is not formatted beyond tab indentation.

use classforge_core::{ClassDescriptor, Decoration, DecoratorArg, FieldDescriptor, ImportRecord};

/// Template every class is rendered into.
pub const CLASS_TEMPLATE: &str = "#!{IMPORTS}#!{DECORATORS}export class #!{NAME}#!{EXTENDS} {\n#!{FIELDS}#!{MODEL_NAME_GETTER}#!{TO_OBJECT_METHOD}}\n#!{EXTRA}";

/// Render a class with the given (path-resolved) imports.
pub fn render_class(class: &ClassDescriptor, imports: &ImportRecord) -> String {
    let decorators: String = class
        .decorators
        .iter()
        .map(|d| format!("{}\n", render_decoration(d)))
        .collect();
    let extends = class
        .extends
        .as_ref()
        .map(|base| format!(" extends {}", base))
        .unwrap_or_default();
    let fields = class
        .fields
        .iter()
        .map(render_field)
        .collect::<Vec<_>>()
        .join("\n");
    let getter = class
        .model_name_getter
        .as_ref()
        .map(|model| format!("\n\tget modelName() {{\n\t\treturn '{}';\n\t}}\n", model))
        .unwrap_or_default();
    let to_object = class
        .projection
        .as_ref()
        .map(|projection| {
            let assignments: String = projection
                .fields
                .iter()
                .map(|f| format!("\t\t\t{}: this.{},\n", f, f))
                .collect();
            format!(
                "\n\ttoObject(): {} {{\n\t\treturn {{\n{}\t\t}};\n\t}}\n",
                projection.target, assignments
            )
        })
        .unwrap_or_default();
    let extra = class
        .extra
        .as_ref()
        .map(|extra| format!("\n{}\n", extra))
        .unwrap_or_default();

    let mut imports = render_imports(imports);
    if !imports.is_empty() {
        imports.push('\n');
    }

    CLASS_TEMPLATE
        .replace("#!{IMPORTS}", &imports)
        .replace("#!{DECORATORS}", &decorators)
        .replace("#!{NAME}", &class.name)
        .replace("#!{EXTENDS}", &extends)
        .replace("#!{FIELDS}", &fields)
        .replace("#!{MODEL_NAME_GETTER}", &getter)
        .replace("#!{TO_OBJECT_METHOD}", &to_object)
        .replace("#!{EXTRA}", &extra)
}

/// Render an import record, one line per module.
pub fn render_imports(imports: &ImportRecord) -> String {
    imports
        .entries()
        .iter()
        .map(|entry| format!("import {{ {} }} from '{}';\n", entry.items.join(", "), entry.from))
        .collect()
}

/// Render one field: decorators, then the declaration, tab-indented.
pub fn render_field(field: &FieldDescriptor) -> String {
    let mut out = String::new();
    for decoration in &field.decorators {
        out.push('\t');
        out.push_str(&render_decoration(decoration));
        out.push('\n');
    }

    let marker = if field.nullable {
        if field.default.is_none() || field.preserve_default_nullable {
            "?"
        } else {
            ""
        }
    } else if field.non_nullable_assertion && field.default.is_none() {
        "!"
    } else {
        ""
    };

    let default = match &field.default {
        Some(expr) => format!(" = {}", expr),
        None if field.nullable && field.use_undefined_default => " = undefined".to_string(),
        None => String::new(),
    };

    out.push_str(&format!(
        "\t{}{}: {}{};\n",
        field.name, marker, field.type_name, default
    ));
    out
}

/// Render a decorator application, e.g. `@Field(() => Int, { nullable: true })`.
pub fn render_decoration(decoration: &Decoration) -> String {
    let args: Vec<String> = decoration.args.iter().map(render_arg).collect();
    format!("@{}({})", decoration.name, args.join(", "))
}

/// Render one decorator argument.
pub fn render_arg(arg: &DecoratorArg) -> String {
    match arg {
        DecoratorArg::Literal(text) => text.clone(),
        DecoratorArg::Quoted(text) => format!("'{}'", text),
        DecoratorArg::Forward(type_name) => format!("() => {}", type_name),
        DecoratorArg::Options(entries) if entries.is_empty() => "{}".to_string(),
        DecoratorArg::Options(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|o| format!("{}: {}", o.key, render_arg(&o.value)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
    }
}
