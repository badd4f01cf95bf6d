//! Module rendering.
//!
//! One Elm module per schema. Canonical dictionary entries are walked in the
//! configured order; primitives, references, and definitions groupings
//! produce no standalone declarations; they surface inline at use sites.

use heck::ToLowerCamelCase;
use serde_json::Value;
use tracing::debug;

use jsonschema_codegen_core::diagnostic::{Diagnostic, DiagnosticKind};
use jsonschema_codegen_core::ir::{
    PrimitiveType, SchemaDefinition, SchemaDictionary, TypeDef, TypeIdentifier,
};
use jsonschema_codegen_core::path::TypePath;
use jsonschema_codegen_core::resolver::{resolve, ResolvedType};
use jsonschema_codegen_core::{Emitter, GenerateOptions};

use crate::names::{
    constructor_name, decoder_name, encoder_name, field_name, module_name, module_title,
    type_name,
};

/// The reference emitter: Elm type aliases plus `Json.Decode` /
/// `Json.Encode` codecs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElmEmitter;

impl Emitter for ElmEmitter {
    fn file_name(&self, schema: &SchemaDefinition, root_module: &str) -> String {
        let title = module_title(schema);
        if root_module.is_empty() {
            format!("{}.elm", title)
        } else {
            format!("{}/{}.elm", root_module.replace('.', "/"), title)
        }
    }

    fn render_schema(
        &self,
        schema: &SchemaDefinition,
        schemas: &SchemaDictionary,
        options: &GenerateOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        let mut ctx = RenderContext {
            schema,
            schemas,
            options,
            imports: Vec::new(),
            diagnostics: Vec::new(),
            needs_unknown: false,
            needs_merge_helper: false,
        };

        let mut sections: Vec<String> = Vec::new();
        for def in schema.canonical_types(options.emit_sort) {
            if let Some(section) = render_def(&mut ctx, def) {
                sections.push(section);
            }
        }
        if ctx.needs_unknown {
            sections.push(UNKNOWN_SECTION.trim().to_string());
        }
        if ctx.needs_merge_helper {
            sections.push(MERGE_OBJECTS_SECTION.trim().to_string());
        }
        debug!(schema = %schema.id, types = sections.len(), "rendered module body");

        let mut out = String::new();
        let module = module_name(&options.root_module, &module_title(schema));
        out.push_str(&format!("module {} exposing (..)\n", module));
        if let Some(description) = &schema.description {
            out.push('\n');
            for line in description.lines() {
                out.push_str(&format!("-- {}\n", line));
            }
        }
        out.push('\n');
        out.push_str("import Json.Decode as Decode exposing (Decoder)\n");
        out.push_str("import Json.Decode.Pipeline exposing (custom, optional, required)\n");
        out.push_str("import Json.Encode as Encode\n");
        for import in &ctx.imports {
            out.push_str(&format!("import {}\n", import));
        }
        for section in sections {
            out.push('\n');
            out.push('\n');
            out.push_str(&section);
            out.push('\n');
        }

        diagnostics.append(&mut ctx.diagnostics);
        out
    }
}

struct RenderContext<'a> {
    schema: &'a SchemaDefinition,
    schemas: &'a SchemaDictionary,
    options: &'a GenerateOptions,
    /// Foreign modules referenced by this one, in first-occurrence order.
    imports: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    needs_unknown: bool,
    needs_merge_helper: bool,
}

/// How one use site (a property, item, or alternative) renders: the type
/// expression plus the decoder and encoder expressions for it.
#[derive(Debug, Clone)]
struct UseSite {
    type_expr: String,
    decoder_expr: String,
    encoder_expr: String,
}

fn unknown_site(ctx: &mut RenderContext<'_>) -> UseSite {
    ctx.needs_unknown = true;
    UseSite {
        type_expr: "Unknown".to_string(),
        decoder_expr: "unknownDecoder".to_string(),
        encoder_expr: "encodeUnknown".to_string(),
    }
}

/// Resolve an identifier and derive the expressions for its use site.
/// Unresolved targets render the `Unknown` placeholder and push exactly one
/// diagnostic.
fn use_site(ctx: &mut RenderContext<'_>, identifier: &TypeIdentifier) -> UseSite {
    match resolve(identifier, ctx.schema, ctx.schemas) {
        Ok(resolved) => resolved_use_site(ctx, resolved),
        Err(diagnostic) => {
            ctx.diagnostics.push(diagnostic);
            unknown_site(ctx)
        }
    }
}

fn resolved_use_site(ctx: &mut RenderContext<'_>, resolved: ResolvedType<'_>) -> UseSite {
    if let TypeDef::Primitive { base, .. } = resolved.def {
        return primitive_site(*base);
    }
    if let TypeDef::Definitions { .. } = resolved.def {
        ctx.diagnostics.push(Diagnostic::new(
            DiagnosticKind::UnresolvedReference,
            resolved.def.path().to_string(),
            "reference points at a definitions grouping, not a concrete type",
        ));
        return unknown_site(ctx);
    }

    let name = decl_type_name(resolved.schema, resolved.def);
    if resolved.schema.id == ctx.schema.id {
        return UseSite {
            type_expr: name.clone(),
            decoder_expr: decoder_name(&name),
            encoder_expr: encoder_name(&name),
        };
    }

    let module = module_name(&ctx.options.root_module, &module_title(resolved.schema));
    if !ctx.imports.contains(&module) {
        ctx.imports.push(module.clone());
    }
    UseSite {
        type_expr: format!("{}.{}", module, name),
        decoder_expr: format!("{}.{}", module, decoder_name(&name)),
        encoder_expr: format!("{}.{}", module, encoder_name(&name)),
    }
}

fn primitive_site(base: PrimitiveType) -> UseSite {
    let (type_expr, decoder_expr, encoder_expr) = match base {
        PrimitiveType::String => ("String", "Decode.string", "Encode.string"),
        PrimitiveType::Integer => ("Int", "Decode.int", "Encode.int"),
        PrimitiveType::Number => ("Float", "Decode.float", "Encode.float"),
        PrimitiveType::Boolean => ("Bool", "Decode.bool", "Encode.bool"),
        PrimitiveType::Null => ("()", "(Decode.null ())", "(\\_ -> Encode.null)"),
    };
    UseSite {
        type_expr: type_expr.to_string(),
        decoder_expr: decoder_expr.to_string(),
        encoder_expr: encoder_expr.to_string(),
    }
}

/// Declared name of a type within its own module: the schema title at the
/// root, the node name everywhere else.
fn decl_type_name(schema: &SchemaDefinition, def: &TypeDef) -> String {
    if def.path().is_root() {
        module_title(schema)
    } else {
        type_name(def.name())
    }
}

/// Human-facing name used in decoder failure messages.
fn display_name(schema: &SchemaDefinition, def: &TypeDef) -> String {
    if def.path().is_root() {
        module_title(schema).to_lower_camel_case()
    } else {
        def.name().to_string()
    }
}

fn render_def(ctx: &mut RenderContext<'_>, def: &TypeDef) -> Option<String> {
    match def {
        TypeDef::Primitive { .. } | TypeDef::Reference { .. } | TypeDef::Definitions { .. } => {
            None
        }
        TypeDef::Enum { base, values, .. } => Some(render_enum(ctx, def, *base, values)),
        TypeDef::Object {
            required,
            properties,
            ..
        } => Some(render_object(ctx, def, required, properties)),
        TypeDef::Array { items, .. } => Some(render_array(ctx, def, items)),
        TypeDef::Tuple { items, .. } => Some(render_tuple(ctx, def, items)),
        TypeDef::Union { types, .. } => Some(render_union(ctx, def, types)),
        TypeDef::OneOf { alternatives, .. } | TypeDef::AnyOf { alternatives, .. } => {
            Some(render_sum(ctx, def, alternatives))
        }
        TypeDef::AllOf { alternatives, .. } => Some(render_all_of(ctx, def, alternatives)),
    }
}

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

fn render_enum(
    ctx: &mut RenderContext<'_>,
    def: &TypeDef,
    base: PrimitiveType,
    values: &[Value],
) -> String {
    let ty = decl_type_name(ctx.schema, def);
    let label = display_name(ctx.schema, def);
    let constructors: Vec<String> = values
        .iter()
        .map(|value| constructor_name(&ty, value))
        .collect();

    let mut decl = format!("type {}\n", ty);
    for (index, constructor) in constructors.iter().enumerate() {
        let lead = if index == 0 { '=' } else { '|' };
        decl.push_str(&format!("    {} {}\n", lead, constructor));
    }

    let decoder = render_enum_decoder(&ty, &label, base, values, &constructors);
    let encoder = render_enum_encoder(&ty, base, values, &constructors);
    format!("{}\n\n\n{}\n\n\n{}", decl.trim_end(), decoder, encoder)
}

fn enum_fail_expr(label: &str, base: PrimitiveType) -> String {
    let rendered_value = match base {
        PrimitiveType::String => "value".to_string(),
        PrimitiveType::Integer => "String.fromInt value".to_string(),
        PrimitiveType::Number => "String.fromFloat value".to_string(),
        PrimitiveType::Boolean => "(if value then \"true\" else \"false\")".to_string(),
        PrimitiveType::Null => "\"null\"".to_string(),
    };
    format!(
        "Decode.fail (\"Unknown {} type: \" ++ {})",
        label, rendered_value
    )
}

fn render_enum_decoder(
    ty: &str,
    label: &str,
    base: PrimitiveType,
    values: &[Value],
    constructors: &[String],
) -> String {
    let name = decoder_name(ty);
    if base == PrimitiveType::Null {
        let constructor = constructors.first().cloned().unwrap_or_else(|| ty.to_string());
        return format!(
            "{name} : Decoder {ty}\n{name} =\n    Decode.null {constructor}",
            name = name,
            ty = ty,
            constructor = constructor
        );
    }

    let primitive = match base {
        PrimitiveType::Integer => "Decode.int",
        PrimitiveType::Number => "Decode.float",
        PrimitiveType::Boolean => "Decode.bool",
        _ => "Decode.string",
    };

    let mut body = String::new();
    match base {
        PrimitiveType::String | PrimitiveType::Integer => {
            body.push_str("                case value of\n");
            for (value, constructor) in values.iter().zip(constructors) {
                body.push_str(&format!("                    {} ->\n", value));
                body.push_str(&format!(
                    "                        Decode.succeed {}\n\n",
                    constructor
                ));
            }
            body.push_str("                    _ ->\n");
            body.push_str(&format!(
                "                        {}",
                enum_fail_expr(label, base)
            ));
        }
        _ => {
            // Float and Bool literals cannot be matched as patterns.
            for (index, (value, constructor)) in values.iter().zip(constructors).enumerate() {
                let keyword = if index == 0 { "if" } else { "else if" };
                let literal = render_condition_literal(value);
                body.push_str(&format!(
                    "                {} value == {} then\n",
                    keyword, literal
                ));
                body.push_str(&format!(
                    "                    Decode.succeed {}\n\n",
                    constructor
                ));
            }
            body.push_str("                else\n");
            body.push_str(&format!("                    {}", enum_fail_expr(label, base)));
        }
    }

    format!(
        "{name} : Decoder {ty}\n\
         {name} =\n    \
             {primitive}\n        \
                 |> Decode.andThen\n            \
                     (\\value ->\n\
         {body}\n            \
                     )",
        name = name,
        ty = ty,
        primitive = primitive,
        body = body
    )
}

fn render_condition_literal(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

fn render_enum_encoder(
    ty: &str,
    base: PrimitiveType,
    values: &[Value],
    constructors: &[String],
) -> String {
    let name = encoder_name(ty);
    let mut arms = String::new();
    for (index, (value, constructor)) in values.iter().zip(constructors).enumerate() {
        if index > 0 {
            arms.push('\n');
        }
        let literal = match base {
            PrimitiveType::String => format!("Encode.string {}", value),
            PrimitiveType::Integer => format!("Encode.int {}", value),
            PrimitiveType::Number => format!("Encode.float {}", value),
            PrimitiveType::Boolean => {
                format!("Encode.bool {}", render_condition_literal(value))
            }
            PrimitiveType::Null => "Encode.null".to_string(),
        };
        arms.push_str(&format!(
            "        {} ->\n            {}\n",
            constructor, literal
        ));
    }

    format!(
        "{name} : {ty} -> Encode.Value\n{name} value =\n    case value of\n{arms}",
        name = name,
        ty = ty,
        arms = arms.trim_end()
    )
}

// ---------------------------------------------------------------------------
// Object
// ---------------------------------------------------------------------------

struct ObjectField {
    json_name: String,
    field: String,
    required: bool,
    site: UseSite,
}

fn render_object(
    ctx: &mut RenderContext<'_>,
    def: &TypeDef,
    required: &std::collections::BTreeSet<String>,
    properties: &std::collections::BTreeMap<String, TypePath>,
) -> String {
    let ty = decl_type_name(ctx.schema, def);
    let fields: Vec<ObjectField> = properties
        .iter()
        .map(|(json_name, path)| ObjectField {
            json_name: json_name.clone(),
            field: field_name(json_name),
            required: required.contains(json_name),
            site: use_site(ctx, &TypeIdentifier::Path(path.clone())),
        })
        .collect();

    // Declaration.
    let mut decl = format!("type alias {} =\n", ty);
    if fields.is_empty() {
        decl.push_str("    {}");
    } else {
        for (index, field) in fields.iter().enumerate() {
            let lead = if index == 0 { '{' } else { ',' };
            let field_type = if field.required {
                field.site.type_expr.clone()
            } else {
                format!("Maybe {}", parenthesize_type(&field.site.type_expr))
            };
            decl.push_str(&format!("    {} {} : {}\n", lead, field.field, field_type));
        }
        decl.push_str("    }");
    }

    // Decoder: a pipeline of required/optional steps in field order, with
    // null treated as missing for optionals.
    let name = decoder_name(&ty);
    let mut decoder = format!("{} : Decoder {}\n{} =\n", name, ty, name);
    if fields.is_empty() {
        decoder.push_str("    Decode.succeed {}");
    } else {
        decoder.push_str(&format!("    Decode.succeed {}\n", ty));
        for (index, field) in fields.iter().enumerate() {
            let step = if field.required {
                format!(
                    "        |> required \"{}\" {}",
                    field.json_name,
                    parenthesize(&field.site.decoder_expr)
                )
            } else {
                format!(
                    "        |> optional \"{}\" (Decode.nullable {}) Nothing",
                    field.json_name,
                    parenthesize(&field.site.decoder_expr)
                )
            };
            decoder.push_str(&step);
            if index + 1 < fields.len() {
                decoder.push('\n');
            }
        }
    }

    // Encoder: one association list per field (singleton for required
    // fields, case split for optionals), concatenated into an object.
    let name = encoder_name(&ty);
    let argument = encoder_argument(&ty, &fields);
    let mut encoder = format!("{} : {} -> Encode.Value\n{} {} =\n", name, ty, name, argument);
    if fields.is_empty() {
        encoder.push_str("    Encode.object []");
    } else {
        encoder.push_str("    let\n");
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                encoder.push('\n');
            }
            if field.required {
                encoder.push_str(&format!(
                    "        {} =\n            [ ( \"{}\", {} {}.{} ) ]\n",
                    field.field, field.json_name, field.site.encoder_expr, argument, field.field
                ));
            } else {
                let inner = format!("{}_", field.field);
                encoder.push_str(&format!(
                    "        {} =\n            case {}.{} of\n                Just {} ->\n                    [ ( \"{}\", {} {} ) ]\n\n                Nothing ->\n                    []\n",
                    field.field,
                    argument,
                    field.field,
                    inner,
                    field.json_name,
                    field.site.encoder_expr,
                    inner
                ));
            }
        }
        encoder.push_str("    in\n");
        let list = fields
            .iter()
            .map(|field| field.field.clone())
            .collect::<Vec<_>>()
            .join(" ++ ");
        encoder.push_str(&format!("    Encode.object ({})", list));
    }

    format!("{}\n\n\n{}\n\n\n{}", decl, decoder, encoder)
}

/// Encoder argument name: the type name, stepped aside when a record field
/// already uses it.
fn encoder_argument(ty: &str, fields: &[ObjectField]) -> String {
    let mut candidate = ty.to_lower_camel_case();
    while fields.iter().any(|field| field.field == candidate) {
        candidate.push('_');
    }
    candidate
}

// ---------------------------------------------------------------------------
// Array and tuple
// ---------------------------------------------------------------------------

fn render_array(ctx: &mut RenderContext<'_>, def: &TypeDef, items: &TypePath) -> String {
    let ty = decl_type_name(ctx.schema, def);
    let site = use_site(ctx, &TypeIdentifier::Path(items.clone()));

    let decl = format!(
        "type alias {} =\n    List {}",
        ty,
        parenthesize_type(&site.type_expr)
    );
    let name = decoder_name(&ty);
    let decoder = format!(
        "{} : Decoder {}\n{} =\n    Decode.list {}",
        name,
        ty,
        name,
        parenthesize(&site.decoder_expr)
    );
    let name = encoder_name(&ty);
    let encoder = format!(
        "{} : {} -> Encode.Value\n{} value =\n    Encode.list {} value",
        name,
        ty,
        name,
        parenthesize(&site.encoder_expr)
    );
    format!("{}\n\n\n{}\n\n\n{}", decl, decoder, encoder)
}

fn render_tuple(ctx: &mut RenderContext<'_>, def: &TypeDef, items: &[TypePath]) -> String {
    let ty = decl_type_name(ctx.schema, def);
    let sites: Vec<UseSite> = items
        .iter()
        .map(|item| use_site(ctx, &TypeIdentifier::Path(item.clone())))
        .collect();

    let mut decl = format!("type alias {} =\n", ty);
    if sites.is_empty() {
        decl.push_str("    {}");
    } else {
        for (index, site) in sites.iter().enumerate() {
            let lead = if index == 0 { '{' } else { ',' };
            decl.push_str(&format!(
                "    {} index{} : {}\n",
                lead, index, site.type_expr
            ));
        }
        decl.push_str("    }");
    }

    let name = decoder_name(&ty);
    let mut decoder = format!("{} : Decoder {}\n{} =\n", name, ty, name);
    if sites.is_empty() {
        decoder.push_str("    Decode.succeed {}");
    } else {
        decoder.push_str(&format!("    Decode.succeed {}\n", ty));
        for (index, site) in sites.iter().enumerate() {
            decoder.push_str(&format!(
                "        |> custom (Decode.index {} {})",
                index,
                parenthesize(&site.decoder_expr)
            ));
            if index + 1 < sites.len() {
                decoder.push('\n');
            }
        }
    }

    let name = encoder_name(&ty);
    let mut encoder = format!("{} : {} -> Encode.Value\n{} value =\n", name, ty, name);
    if sites.is_empty() {
        encoder.push_str("    Encode.list identity []");
    } else {
        encoder.push_str("    Encode.list identity\n");
        for (index, site) in sites.iter().enumerate() {
            let lead = if index == 0 { '[' } else { ',' };
            encoder.push_str(&format!(
                "        {} {} value.index{}\n",
                lead, site.encoder_expr, index
            ));
        }
        encoder.push_str("        ]");
    }

    format!("{}\n\n\n{}\n\n\n{}", decl, decoder, encoder)
}

// ---------------------------------------------------------------------------
// Union and composition
// ---------------------------------------------------------------------------

fn render_union(ctx: &mut RenderContext<'_>, def: &TypeDef, members: &[PrimitiveType]) -> String {
    let ty = decl_type_name(ctx.schema, def);

    struct Branch {
        constructor: String,
        payload: Option<UseSite>,
    }
    let branches: Vec<Branch> = members
        .iter()
        .map(|member| {
            let constructor = format!("{}{}", ty, type_name(member.as_keyword()));
            let payload = match member {
                PrimitiveType::Null => None,
                other => Some(primitive_site(*other)),
            };
            Branch {
                constructor,
                payload,
            }
        })
        .collect();

    let mut decl = format!("type {}\n", ty);
    for (index, branch) in branches.iter().enumerate() {
        let lead = if index == 0 { '=' } else { '|' };
        match &branch.payload {
            Some(site) => decl.push_str(&format!(
                "    {} {} {}\n",
                lead, branch.constructor, site.type_expr
            )),
            None => decl.push_str(&format!("    {} {}\n", lead, branch.constructor)),
        }
    }

    let name = decoder_name(&ty);
    let mut decoder = format!("{} : Decoder {}\n{} =\n    Decode.oneOf\n", name, ty, name);
    for (index, branch) in branches.iter().enumerate() {
        let lead = if index == 0 { '[' } else { ',' };
        match &branch.payload {
            Some(site) => decoder.push_str(&format!(
                "        {} Decode.map {} {}\n",
                lead, branch.constructor, site.decoder_expr
            )),
            None => decoder.push_str(&format!(
                "        {} Decode.null {}\n",
                lead, branch.constructor
            )),
        }
    }
    decoder.push_str("        ]");

    let name = encoder_name(&ty);
    let mut encoder = format!(
        "{} : {} -> Encode.Value\n{} value =\n    case value of\n",
        name, ty, name
    );
    for (index, branch) in branches.iter().enumerate() {
        if index > 0 {
            encoder.push('\n');
        }
        match &branch.payload {
            Some(site) => encoder.push_str(&format!(
                "        {} inner ->\n            {} inner\n",
                branch.constructor, site.encoder_expr
            )),
            None => encoder.push_str(&format!(
                "        {} ->\n            Encode.null\n",
                branch.constructor
            )),
        }
    }

    format!(
        "{}\n\n\n{}\n\n\n{}",
        decl.trim_end(),
        decoder,
        encoder.trim_end()
    )
}

/// Constructor/field suffixes for composition alternatives, deduplicated by
/// positional index.
fn alternative_suffixes(sites: &[UseSite]) -> Vec<String> {
    let mut suffixes: Vec<String> = Vec::new();
    for (index, site) in sites.iter().enumerate() {
        let local = site
            .type_expr
            .rsplit('.')
            .next()
            .unwrap_or(&site.type_expr);
        let cleaned: String = local.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        let mut suffix = if cleaned.is_empty() {
            format!("Alt{}", index)
        } else {
            cleaned
        };
        if suffixes.contains(&suffix) {
            suffix.push_str(&index.to_string());
        }
        suffixes.push(suffix);
    }
    suffixes
}

fn render_sum(ctx: &mut RenderContext<'_>, def: &TypeDef, alternatives: &[TypePath]) -> String {
    let ty = decl_type_name(ctx.schema, def);
    let sites: Vec<UseSite> = alternatives
        .iter()
        .map(|alternative| use_site(ctx, &TypeIdentifier::Path(alternative.clone())))
        .collect();
    let suffixes = alternative_suffixes(&sites);

    let mut decl = format!("type {}\n", ty);
    for (index, (site, suffix)) in sites.iter().zip(&suffixes).enumerate() {
        let lead = if index == 0 { '=' } else { '|' };
        decl.push_str(&format!(
            "    {} {}{} {}\n",
            lead, ty, suffix, site.type_expr
        ));
    }

    let name = decoder_name(&ty);
    let mut decoder = format!("{} : Decoder {}\n{} =\n    Decode.oneOf\n", name, ty, name);
    for (index, (site, suffix)) in sites.iter().zip(&suffixes).enumerate() {
        let lead = if index == 0 { '[' } else { ',' };
        decoder.push_str(&format!(
            "        {} Decode.map {}{} {}\n",
            lead, ty, suffix, site.decoder_expr
        ));
    }
    decoder.push_str("        ]");

    let name = encoder_name(&ty);
    let mut encoder = format!(
        "{} : {} -> Encode.Value\n{} value =\n    case value of\n",
        name, ty, name
    );
    for (index, (site, suffix)) in sites.iter().zip(&suffixes).enumerate() {
        if index > 0 {
            encoder.push('\n');
        }
        encoder.push_str(&format!(
            "        {}{} inner ->\n            {} inner\n",
            ty, suffix, site.encoder_expr
        ));
    }

    format!(
        "{}\n\n\n{}\n\n\n{}",
        decl.trim_end(),
        decoder,
        encoder.trim_end()
    )
}

fn render_all_of(ctx: &mut RenderContext<'_>, def: &TypeDef, alternatives: &[TypePath]) -> String {
    let ty = decl_type_name(ctx.schema, def);
    let sites: Vec<UseSite> = alternatives
        .iter()
        .map(|alternative| use_site(ctx, &TypeIdentifier::Path(alternative.clone())))
        .collect();
    let fields: Vec<String> = alternative_suffixes(&sites)
        .iter()
        .map(|suffix| field_name(suffix))
        .collect();
    if !sites.is_empty() {
        ctx.needs_merge_helper = true;
    }

    let mut decl = format!("type alias {} =\n", ty);
    if sites.is_empty() {
        decl.push_str("    {}");
    } else {
        for (index, (site, field)) in sites.iter().zip(&fields).enumerate() {
            let lead = if index == 0 { '{' } else { ',' };
            decl.push_str(&format!("    {} {} : {}\n", lead, field, site.type_expr));
        }
        decl.push_str("    }");
    }

    // Every part decodes from the same object.
    let name = decoder_name(&ty);
    let mut decoder = format!("{} : Decoder {}\n{} =\n", name, ty, name);
    if sites.is_empty() {
        decoder.push_str("    Decode.succeed {}");
    } else {
        decoder.push_str(&format!("    Decode.succeed {}\n", ty));
        for (index, site) in sites.iter().enumerate() {
            decoder.push_str(&format!(
                "        |> custom {}",
                parenthesize(&site.decoder_expr)
            ));
            if index + 1 < sites.len() {
                decoder.push('\n');
            }
        }
    }

    let name = encoder_name(&ty);
    let mut encoder = format!("{} : {} -> Encode.Value\n{} value =\n", name, ty, name);
    if sites.is_empty() {
        encoder.push_str("    Encode.object []");
    } else {
        encoder.push_str("    mergeObjects\n");
        for (index, (site, field)) in sites.iter().zip(&fields).enumerate() {
            let lead = if index == 0 { '[' } else { ',' };
            encoder.push_str(&format!(
                "        {} {} value.{}\n",
                lead, site.encoder_expr, field
            ));
        }
        encoder.push_str("        ]");
    }

    format!("{}\n\n\n{}\n\n\n{}", decl, decoder, encoder)
}

// ---------------------------------------------------------------------------
// Emitted helpers
// ---------------------------------------------------------------------------

const UNKNOWN_SECTION: &str = r#"
type Unknown
    = Unknown


unknownDecoder : Decoder Unknown
unknownDecoder =
    Decode.fail "unresolved reference"


encodeUnknown : Unknown -> Encode.Value
encodeUnknown _ =
    Encode.null
"#;

const MERGE_OBJECTS_SECTION: &str = r#"
mergeObjects : List Encode.Value -> Encode.Value
mergeObjects values =
    values
        |> List.concatMap
            (\value ->
                value
                    |> Decode.decodeValue (Decode.keyValuePairs Decode.value)
                    |> Result.withDefault []
            )
        |> Encode.object
"#;

/// Wrap a compound expression in parentheses so it can be passed as a
/// function argument.
fn parenthesize(expr: &str) -> String {
    if expr.contains(' ') && !expr.starts_with('(') {
        format!("({})", expr)
    } else {
        expr.to_string()
    }
}

fn parenthesize_type(expr: &str) -> String {
    parenthesize(expr)
}

// ===========================================================================
// Tests
// ===========================================================================
