//! Describe command: load a dataset and report its statistics.

use anyhow::Result;
use loocv_evaluate::DatasetSummary;
use tracing::info_span;

use crate::cli::DescribeArgs;
use crate::{report, source};

/// Load the configured dataset and log its statistics.
pub fn run(args: DescribeArgs) -> Result<()> {
    let _cmd = info_span!("describe").entered();
    let config = source::load_config(&args.source)?;
    let dataset = source::load(&config)?;

    report::log_dataset(&DatasetSummary::from_dataset(&dataset));
    Ok(())
}
