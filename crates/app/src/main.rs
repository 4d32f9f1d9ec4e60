use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = picker_app::AppConfig::from_env().context("reading PICKER_* configuration")?;
    picker_observability::init(config.log_format);

    if config.uses_default_catalog() {
        tracing::warn!(
            path = %config.catalog_path.display(),
            "PICKER_CATALOG not set; using default catalog path"
        );
    }

    let report = picker_app::run(&config)
        .with_context(|| format!("planning from {}", config.catalog_path.display()))?;

    tracing::info!(
        run_id = %report.run_id,
        pallets = report.summary.pallets,
        items = report.summary.items,
        total_weight = report.summary.total_weight,
        "load list ready"
    );

    let json = report.to_json_pretty()?;
    println!("{json}");
    Ok(())
}
