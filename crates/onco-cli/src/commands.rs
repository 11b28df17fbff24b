use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use onco_calc::validate::parse_positive;
use onco_calc::{
    Anc, AncInput, Bazett, Bmi, BmiInput, BsaInput, Calvert, CalvertInput, ChildPugh,
    ChildPughInput, CockcroftGault, CrClInput, GradeSelection, Mosteller, PerformanceStatus,
    QtcInput, TnmSelection, TnmStaging, ToxicityGrader,
};
use onco_cli::evaluation::{Evaluation, evaluate};
use onco_cli::render::{
    ResultRows, catalog_json, catalog_table, evaluation_json, evaluation_table,
};
use onco_model::{CalculationOptions, GfrCapPolicy};

use crate::cli::{CalvertArgs, Command, OutputFormatArg};

pub fn run_list(format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => println!("{}", catalog_table()),
        OutputFormatArg::Json => println!("{}", catalog_json()?),
    }
    Ok(())
}

/// Parse the inputs for one calculator, run it and print the outcome.
///
/// Returns whether a result was produced.
pub fn run_calculator(command: &Command, format: OutputFormatArg) -> Result<bool> {
    match command {
        Command::List => {
            run_list(format)?;
            Ok(true)
        }
        Command::Bsa(args) => {
            let input = BsaInput::parse(&args.height, &args.weight).context("invalid BSA input")?;
            show(&evaluate(&Mosteller, input), format)
        }
        Command::Bmi(args) => {
            let input = BmiInput::parse(&args.weight, &args.height).context("invalid BMI input")?;
            show(&evaluate(&Bmi, input), format)
        }
        Command::Anc(args) => {
            let input = AncInput::parse(&args.wbc, &args.neutrophils, args.bands.as_deref())
                .context("invalid ANC input")?;
            show(&evaluate(&Anc, input), format)
        }
        Command::Calvert(args) => {
            let input = CalvertInput::parse(&args.auc, &args.gfr).context("invalid Calvert input")?;
            let calvert = Calvert::new(calvert_options(args)?);
            show(&evaluate(&calvert, input), format)
        }
        Command::ChildPugh(args) => {
            let input = ChildPughInput::parse(
                &args.bilirubin,
                &args.albumin,
                &args.inr,
                &args.ascites,
                &args.encephalopathy,
            )
            .context("invalid Child-Pugh input")?;
            show(&evaluate(&ChildPugh, input), format)
        }
        Command::Crcl(args) => {
            let input = CrClInput::parse(&args.age, &args.weight, &args.creatinine, &args.sex)
                .context("invalid creatinine clearance input")?;
            show(&evaluate(&CockcroftGault, input), format)
        }
        Command::Qtc(args) => {
            let input = QtcInput::parse(&args.qt, &args.heart_rate).context("invalid QTc input")?;
            show(&evaluate(&Bazett, input), format)
        }
        Command::Stage(args) => {
            let input = TnmSelection::parse(
                args.tumor.as_deref(),
                args.node.as_deref(),
                args.metastasis.as_deref(),
            )
            .context("invalid TNM selection")?;
            show(&evaluate(&TnmStaging, input), format)
        }
        Command::Toxicity(args) => {
            let input = GradeSelection::parse_ctcae(&args.grade).context("invalid CTCAE grade")?;
            show(&evaluate(&ToxicityGrader, input), format)
        }
        Command::Ecog(args) => {
            let input = GradeSelection::parse_ecog(&args.grade).context("invalid ECOG grade")?;
            show(&evaluate(&PerformanceStatus, input), format)
        }
    }
}

fn calvert_options(args: &CalvertArgs) -> Result<CalculationOptions> {
    let gfr_cap = match args.cap_gfr.as_deref() {
        Some(raw) => GfrCapPolicy::CapAt(parse_positive("gfr_cap", raw).context("invalid GFR cap")?),
        None => GfrCapPolicy::Uncapped,
    };
    debug!(?gfr_cap, "calvert options");
    Ok(CalculationOptions::new().with_gfr_cap(gfr_cap))
}

fn show<I, O>(evaluation: &Evaluation<I, O>, format: OutputFormatArg) -> Result<bool>
where
    I: Serialize,
    O: Serialize + ResultRows,
{
    match format {
        OutputFormatArg::Table => println!("{}", evaluation_table(evaluation)),
        OutputFormatArg::Json => println!("{}", evaluation_json(evaluation)?),
    }
    Ok(evaluation.has_result())
}
