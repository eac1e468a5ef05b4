use crate::cli::root_commands::SchemaArgs;

/// Handle `folio schema`. Always prints pretty JSON, since a schema has no
/// useful table form.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = folio_core::schema::schema_for_type(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
