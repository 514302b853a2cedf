//! List rule-derived factors without predicting.

use anyhow::Result;
use glyco::prelude::*;

use crate::input::VitalsArgs;
use crate::render::print_factors;

pub fn run(args: &VitalsArgs, json: bool) -> Result<()> {
    let vitals = args.resolve()?;
    let report = evaluate_risk_factors(&vitals);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_factors(&report);
    }

    Ok(())
}
