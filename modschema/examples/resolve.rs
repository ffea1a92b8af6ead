//! Example resolving the type sites of a small module.
//!
//! Run with: `cargo run --example resolve [registry.xml]`
//!
//! Set `RUST_LOG=debug` to see each classification.

use modschema::prelude::*;

const MANIFEST: &str = r#"<typeRegistry>
    <enum name="io.dagger.client.ImageMediaTypes">Image media types</enum>
    <scalar name="io.dagger.client.Platform" description="Target platform"/>
    <object name="io.dagger.client.Container"/>
    <object name="io.dagger.client.Directory"/>
</typeRegistry>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = match std::env::args().nth(1) {
        Some(path) => modschema::registry::parse_manifest_file(std::path::Path::new(&path))?,
        None => parse_manifest(MANIFEST)?,
    };
    validate_registry(&registry)?;

    let sites = [
        TypeDescriptor::new("void", KindTag::Void),
        TypeDescriptor::new("int", KindTag::Int),
        TypeDescriptor::declared("java.lang.String").nullable(),
        TypeDescriptor::array("java.lang.String[]"),
        TypeDescriptor::declared("java.util.List<io.dagger.client.Container>"),
        TypeDescriptor::declared("java.util.Optional<io.dagger.client.Directory>"),
        TypeDescriptor::declared("io.dagger.client.ImageMediaTypes"),
        TypeDescriptor::declared("io.dagger.client.Platform"),
        TypeDescriptor::declared("java.util.Map<java.lang.String, java.lang.String>"),
        TypeDescriptor::declared("io.dagger.client.Secrt"),
    ];

    let resolver = TypeDescriptorResolver::new(&registry);
    let options = RenderOptions::new().include_descriptions(true);

    for (site, result) in sites.iter().zip(resolver.resolve_all(&sites)) {
        match result {
            Ok(expr) => println!("{}\n    {}", site, expr.render_with(&options)),
            Err(e) => tracing::error!("{}: {}", site, e),
        }
    }

    Ok(())
}
