mod bootstrap;

use anyhow::{Context, Result};
use inflammation_core::graph::Visualizer;
use inflammation_core::settings::Settings;
use inflammation_data::compute::{analyse_data, summarise_data};
use inflammation_ui::{JsonVisualizer, TerminalVisualizer};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("inflammation v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Output: {}, Data: {}",
        settings.view,
        settings.output,
        settings.data_dir.display()
    );

    let mut visualizer: Box<dyn Visualizer> = if settings.is_json_output() {
        Box::new(JsonVisualizer::stdout())
    } else {
        Box::new(TerminalVisualizer::new(&settings.theme))
    };

    run(&settings, visualizer.as_mut())
}

/// Run the selected view over `settings.data_dir`, sending every graph to
/// `visualizer`.
fn run(settings: &Settings, visualizer: &mut dyn Visualizer) -> Result<()> {
    if settings.is_visualize_view() {
        let shown = summarise_data(
            &settings.data_dir,
            &settings.pattern,
            settings.normalise,
            visualizer,
        )
        .with_context(|| format!("summarising {}", settings.data_dir.display()))?;
        tracing::info!("Displayed {} file summaries", shown);
    } else {
        if settings.normalise {
            tracing::warn!("--normalise only applies to the visualize view; ignoring");
        }
        let result = analyse_data(&settings.data_dir, &settings.pattern, visualizer)
            .with_context(|| format!("analysing {}", settings.data_dir.display()))?;
        let meta = &result.metadata;
        tracing::info!(
            "Analysed {} files ({} patients, {} days) in {:.3}s load + {:.3}s compute",
            meta.files_loaded,
            meta.patients,
            meta.days,
            meta.load_time_seconds,
            meta.compute_time_seconds
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).expect("write csv");
    }

    fn settings_for(dir: &Path, extra: &[&str]) -> Settings {
        let mut args = vec!["inflammation".to_string(), dir.display().to_string()];
        args.extend(extra.iter().map(|s| s.to_string()));
        Settings::load_from_args(args)
    }

    fn json_docs(bytes: &[u8]) -> Vec<Value> {
        serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .collect::<std::result::Result<_, _>>()
            .expect("valid json")
    }

    #[test]
    fn test_run_analyse_writes_std_series() {
        let tmp = TempDir::new().expect("tempdir");
        write_csv(tmp.path(), "inflammation-01.csv", "0,1\n0,2\n");
        write_csv(tmp.path(), "inflammation-02.csv", "0,2\n0,4\n");

        let settings = settings_for(tmp.path(), &["--output", "json"]);
        let mut vis = JsonVisualizer::new(Vec::new());
        run(&settings, &mut vis).expect("run");

        let docs = json_docs(&vis.into_inner());
        assert_eq!(docs.len(), 1);
        let values = &docs[0]["series"][0]["values"];
        assert_eq!(docs[0]["series"][0]["name"], "standard deviation by day");
        assert_eq!(values[0], 0.0);
        assert_eq!(values[1], 0.75);
    }

    #[test]
    fn test_run_visualize_one_graph_per_file() {
        let tmp = TempDir::new().expect("tempdir");
        write_csv(tmp.path(), "inflammation-01.csv", "0,1\n0,2\n");
        write_csv(tmp.path(), "inflammation-02.csv", "1,1\n");
        write_csv(tmp.path(), "notes.csv", "9,9\n");

        let settings = settings_for(tmp.path(), &["--view", "visualize", "--normalise"]);
        let mut vis = JsonVisualizer::new(Vec::new());
        run(&settings, &mut vis).expect("run");

        let docs = json_docs(&vis.into_inner());
        let titles: Vec<&str> = docs.iter().filter_map(|d| d["title"].as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "inflammation-01.csv (normalised)",
                "inflammation-02.csv (normalised)"
            ]
        );
    }

    #[test]
    fn test_run_missing_directory_errors() {
        let tmp = TempDir::new().expect("tempdir");
        let settings = settings_for(&tmp.path().join("absent"), &[]);
        let mut vis = JsonVisualizer::new(Vec::new());
        let err = run(&settings, &mut vis).unwrap_err();
        assert!(format!("{err:#}").contains("analysing"));
    }
}
