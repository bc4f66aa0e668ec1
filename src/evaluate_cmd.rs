//! Evaluate command: leave-one-out classification over a dataset.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use loocv_evaluate::{RunReport, leave_one_out, to_json};

use crate::cli::EvaluateArgs;
use crate::config::LoocvConfig;
use crate::{convert, report, source};

/// Run the leave-one-out pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();

    // 1. Config file plus CLI overrides
    let mut config = source::load_config(&args.source)?;
    apply_overrides(&mut config, &args);

    let knn_cfg = convert::build_knn_config(&config.knn)?;
    let eval_cfg = convert::build_evaluate_config(&config.evaluate);

    // 2. Dataset
    let dataset = source::load(&config)?;

    // 3. Evaluation
    info!(
        k = knn_cfg.k(),
        distance = %knn_cfg.distance(),
        parallel = eval_cfg.parallel(),
        "running leave-one-out evaluation"
    );
    let evaluation =
        leave_one_out(&dataset, &knn_cfg, &eval_cfg).context("leave-one-out evaluation failed")?;

    // 4. Report
    let run_report = RunReport::new(&dataset, &knn_cfg, &eval_cfg, evaluation.summary())
        .context("failed to build run report")?;
    report::log_report(&run_report);

    if args.json {
        let json = to_json(&run_report).context("failed to serialize run report")?;
        println!("{json}");
    }

    Ok(())
}

fn apply_overrides(config: &mut LoocvConfig, args: &EvaluateArgs) {
    if let Some(k) = args.k {
        config.knn.k = k;
    }
    if let Some(distance) = &args.distance {
        config.knn.distance = distance.clone();
    }
    if args.parallel {
        config.evaluate.parallel = true;
    }
}
