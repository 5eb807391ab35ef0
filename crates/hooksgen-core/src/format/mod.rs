//! Renders a [`PluginIR`] as a single TypeScript module.

pub mod boilerplate;
mod operation;
mod type_decl;

pub use operation::escape_template_literal;
pub use operation::FragmentDeclarations;
pub use operation::OperationDeclarations;
pub use type_decl::apply_modifiers;
pub use type_decl::FieldPosition;
pub use type_decl::TypeDeclarations;

use crate::ir::PluginIR;
use crate::GeneratorConfig;

/// Renders the whole output file for `ir`.
///
/// Fragment sections for every file come before any operation section, since
/// operation bindings interpolate fragment bindings at module load time.
pub fn format(ir: &PluginIR, config: &GeneratorConfig) -> String {
    let mut sections: Vec<String> = vec![
        boilerplate::DISCLAIMER.to_string(),
        if config.subscriptions {
            format!("{}{}", boilerplate::IMPORTS, boilerplate::SUBSCRIPTION_IMPORTS)
        } else {
            boilerplate::IMPORTS.to_string()
        },
    ];

    if !ir.input_types().is_empty() {
        let decls: String = ir.input_types().iter()
            .map(|input_type| TypeDeclarations {
                position: FieldPosition::Input,
                type_ir: input_type,
            }.to_string())
            .collect();
        sections.push(section("GraphQL Input Types", decls));
    }

    for file in ir.files() {
        let decls: Vec<String> = file.fragments().iter()
            .map(|frag| FragmentDeclarations(frag).to_string())
            .collect();
        sections.push(section(
            format!("Fragments from {}", file.file_path().display()).as_str(),
            decls.join("\n"),
        ));
    }

    for file in ir.files() {
        let decls: Vec<String> = file.operations().iter()
            .map(|op| OperationDeclarations(op).to_string())
            .collect();
        sections.push(section(
            format!("Operations from {}", file.file_path().display()).as_str(),
            decls.join("\n"),
        ));
    }

    sections.push(boilerplate::POSTAMBLE.to_string());
    if config.subscriptions {
        sections.push(boilerplate::SUBSCRIPTION_POSTAMBLE.to_string());
    }

    sections.join("\n")
}

fn section(title: &str, body: String) -> String {
    format!("/*\n * {title}\n */\n\n{body}")
}

#[cfg(test)]
mod tests;
