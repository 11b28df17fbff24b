//! Runs a calculator and keeps its input alongside the outcome.

use std::time::Instant;

use onco_calc::Calculator;
use onco_model::CalculatorKind;
use serde::Serialize;
use tracing::{info, info_span, warn};

/// Outcome of one calculator invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation<I, O> {
    pub calculator: CalculatorKind,
    pub title: &'static str,
    pub input: I,
    /// `None` when the input was outside the calculator's valid domain.
    pub result: Option<O>,
}

impl<I, O> Evaluation<I, O> {
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}

/// Run `calculator` on an already-parsed input.
pub fn evaluate<C>(calculator: &C, input: C::Input) -> Evaluation<C::Input, C::Output>
where
    C: Calculator,
{
    let kind = calculator.kind();
    let span = info_span!("calculate", calculator = kind.id());
    let _guard = span.enter();
    let start = Instant::now();
    let result = calculator.calculate(&input);
    if result.is_some() {
        info!(
            duration_us = start.elapsed().as_micros(),
            "calculation complete"
        );
    } else {
        warn!("no result for the given input");
    }
    Evaluation {
        calculator: kind,
        title: kind.title(),
        input,
        result,
    }
}
