// Final report: the assessment's progress and collected suggestions together
// with the latest resume analysis.

pub mod handlers;
