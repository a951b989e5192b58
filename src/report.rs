//! # Pair comparison across five matrix representations
//!
//! [`SpectralComparator::compare`] derives every representation for both
//! graphs, reduces each matrix to its canonical spectrum and classifies the
//! pair per representation. The result is a [`PairReport`] in the fixed order
//! of [`Representation::ALL`].
//!
//! Rendering is left to the caller: [`PairReport::render`] produces the
//! textual form in a chosen [`Locale`], and [`ReportSink`] implementations
//! push reports to a writer or to the log.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, info, warn};

use crate::adjacency::{AdjacencyMatrix, IntoAdjacency};
use crate::builder::{ComparisonParams, ErrorPolicy};
use crate::cospectral::{is_cospectral, max_deviation};
use crate::error::{Result, SpectralError};
use crate::laplacian::{derive, DerivedMatrices};
use crate::spectrum::{optional_spectrum, Spectrum};

/// Width the reference output pads representation names to.
pub const NAME_WIDTH: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Representation {
    Adjacency,
    Laplacian,
    NormalizedLaplacian,
    SignlessLaplacian,
    LineGraphAdjacency,
}

impl Representation {
    /// Report order.
    pub const ALL: [Representation; 5] = [
        Representation::Adjacency,
        Representation::Laplacian,
        Representation::NormalizedLaplacian,
        Representation::SignlessLaplacian,
        Representation::LineGraphAdjacency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Representation::Adjacency => "Adjacency",
            Representation::Laplacian => "Laplacian",
            Representation::NormalizedLaplacian => "NormalizedLaplacian",
            Representation::SignlessLaplacian => "SignlessLaplacian",
            Representation::LineGraphAdjacency => "LineGraphAdjacency",
        }
    }

    fn select<'a>(
        &self,
        adjacency: &'a AdjacencyMatrix,
        derived: &'a DerivedMatrices,
    ) -> Option<&'a DenseMatrix<f64>> {
        match self {
            Representation::Adjacency => Some(adjacency.as_dense()),
            Representation::Laplacian => Some(&derived.laplacian),
            Representation::NormalizedLaplacian => Some(&derived.normalized_laplacian),
            Representation::SignlessLaplacian => Some(&derived.signless_laplacian),
            Representation::LineGraphAdjacency => derived.line_graph.as_ref(),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Representation::ALL
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown representation: {}", s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Cospectral,
    Distinct,
    /// Lenient mode only: the spectrum could not be computed.
    Unavailable(String),
}

impl Verdict {
    pub fn is_cospectral(&self) -> bool {
        matches!(self, Verdict::Cospectral)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    /// Wording of the reference notebook output.
    Italian,
}

impl Locale {
    fn word(&self, verdict: &Verdict) -> &'static str {
        match (self, verdict) {
            (Locale::English, Verdict::Cospectral) => "cospectral",
            (Locale::English, Verdict::Distinct) => "distinct",
            (Locale::English, Verdict::Unavailable(_)) => "unavailable",
            (Locale::Italian, Verdict::Cospectral) => "cospettrali",
            (Locale::Italian, Verdict::Distinct) => "diversi",
            (Locale::Italian, Verdict::Unavailable(_)) => "non disponibile",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub representation: Representation,
    pub verdict: Verdict,
    /// Spectra of the two graphs, absent when the verdict is `Unavailable`.
    pub left: Option<Spectrum>,
    pub right: Option<Spectrum>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    pub name: Option<String>,
    pub entries: Vec<ReportEntry>,
}

impl PairReport {
    pub fn get(&self, representation: Representation) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.representation == representation)
    }

    pub fn verdict(&self, representation: Representation) -> Option<&Verdict> {
        self.get(representation).map(|e| &e.verdict)
    }

    pub fn is_cospectral(&self, representation: Representation) -> bool {
        self.verdict(representation).is_some_and(Verdict::is_cospectral)
    }

    pub fn all_cospectral(&self) -> bool {
        self.entries.iter().all(|e| e.verdict.is_cospectral())
    }

    pub fn cospectral_representations(&self) -> Vec<Representation> {
        self.entries
            .iter()
            .filter(|e| e.verdict.is_cospectral())
            .map(|e| e.representation)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportEntry> {
        self.entries.iter()
    }

    /// Blank line, the pair name if any, then `<name padded to 15>: <word>` per entry.
    pub fn render(&self, locale: Locale) -> String {
        let mut out = String::from("\n");
        if let Some(name) = &self.name {
            out.push_str(name);
            out.push('\n');
        }
        for entry in &self.entries {
            out.push_str(&format!(
                "{:<width$}: {}\n",
                entry.representation.name(),
                locale.word(&entry.verdict),
                width = NAME_WIDTH
            ));
        }
        out
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Locale::English))
    }
}

/// Caller-supplied destination for finished reports.
pub trait ReportSink {
    fn emit(&mut self, report: &PairReport) -> Result<()>;
}

/// Writes rendered reports to any `io::Write`.
pub struct WriterSink<W: Write> {
    writer: W,
    locale: Locale,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, locale: Locale) -> Self {
        Self { writer, locale }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, report: &PairReport) -> Result<()> {
        self.writer.write_all(report.render(self.locale).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// One `info!` line per entry.
#[derive(Debug, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn emit(&mut self, report: &PairReport) -> Result<()> {
        let name = report.name.as_deref().unwrap_or("<unnamed pair>");
        for entry in &report.entries {
            info!(
                "{}: {:<width$} {:?}",
                name,
                entry.representation.name(),
                entry.verdict,
                width = NAME_WIDTH
            );
        }
        Ok(())
    }
}

/// Runs the full pipeline for graph pairs with fixed parameters.
#[derive(Clone, Debug, Default)]
pub struct SpectralComparator {
    params: ComparisonParams,
}

impl SpectralComparator {
    pub fn new(params: ComparisonParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ComparisonParams {
        &self.params
    }

    pub fn compare<A, B>(&self, left: A, right: B) -> Result<PairReport>
    where
        A: IntoAdjacency,
        B: IntoAdjacency,
    {
        let left = left.into_adjacency()?;
        let right = right.into_adjacency()?;
        self.compare_matrices(None, &left, &right)
    }

    pub fn compare_named<A, B>(&self, name: &str, left: A, right: B) -> Result<PairReport>
    where
        A: IntoAdjacency,
        B: IntoAdjacency,
    {
        let left = left.into_adjacency()?;
        let right = right.into_adjacency()?;
        self.compare_matrices(Some(name.to_string()), &left, &right)
    }

    /// Independent pairs, evaluated in parallel; output order follows input order.
    pub fn compare_many(
        &self,
        pairs: &[(String, AdjacencyMatrix, AdjacencyMatrix)],
    ) -> Vec<Result<PairReport>> {
        info!("Comparing {} graph pairs", pairs.len());
        pairs
            .par_iter()
            .map(|(name, left, right)| self.compare_matrices(Some(name.clone()), left, right))
            .collect()
    }

    fn compare_matrices(
        &self,
        name: Option<String>,
        left: &AdjacencyMatrix,
        right: &AdjacencyMatrix,
    ) -> Result<PairReport> {
        info!(
            "Comparing graphs of order {} and {}{}",
            left.order(),
            right.order(),
            name.as_deref().map(|n| format!(" ({})", n)).unwrap_or_default()
        );
        if left.order() != right.order() {
            debug!("Orders differ; size-dependent spectra cannot match");
        }

        let (left_derived, right_derived) = if self.params.parallel {
            rayon::join(|| derive(left), || derive(right))
        } else {
            (derive(left), derive(right))
        };

        let evaluate = |rep: Representation| {
            self.evaluate(rep, left, &left_derived, right, &right_derived)
        };
        let outcomes: Vec<Result<ReportEntry>> = if self.params.parallel {
            Representation::ALL.par_iter().map(|&rep| evaluate(rep)).collect()
        } else {
            Representation::ALL.iter().map(|&rep| evaluate(rep)).collect()
        };

        let mut entries = Vec::with_capacity(outcomes.len());
        for (rep, outcome) in Representation::ALL.iter().zip(outcomes) {
            match (outcome, self.params.policy) {
                (Ok(entry), _) => entries.push(entry),
                (Err(e), ErrorPolicy::Strict) => return Err(e),
                (Err(e), ErrorPolicy::Lenient) => {
                    warn!("{} unavailable: {}", rep.name(), e);
                    entries.push(ReportEntry {
                        representation: *rep,
                        verdict: e.into(),
                        left: None,
                        right: None,
                    });
                }
            }
        }

        let report = PairReport { name, entries };
        info!(
            "Cospectral under {} of {} representations",
            report.cospectral_representations().len(),
            report.entries.len()
        );
        Ok(report)
    }

    fn evaluate(
        &self,
        rep: Representation,
        left: &AdjacencyMatrix,
        left_derived: &DerivedMatrices,
        right: &AdjacencyMatrix,
        right_derived: &DerivedMatrices,
    ) -> Result<ReportEntry> {
        let params = &self.params.spectrum;
        let s1 = optional_spectrum(rep.select(left, left_derived), params)
            .map_err(|e| e.for_representation(rep.name()))?;
        let s2 = optional_spectrum(rep.select(right, right_derived), params)
            .map_err(|e| e.for_representation(rep.name()))?;

        let verdict = if is_cospectral(&s1, &s2, &self.params.tolerance) {
            Verdict::Cospectral
        } else {
            Verdict::Distinct
        };
        debug!(
            "{}: {:?} (max deviation {:?})",
            rep.name(),
            verdict,
            max_deviation(&s1, &s2)
        );

        Ok(ReportEntry { representation: rep, verdict, left: Some(s1), right: Some(s2) })
    }
}

/// Compare two graphs with default parameters (strict, sequential).
///
/// # Examples
///
/// ```
/// use cospectra::report::{compare, Representation, Verdict};
///
/// let star = vec![
///     vec![0.0, 1.0, 1.0, 1.0],
///     vec![1.0, 0.0, 0.0, 0.0],
///     vec![1.0, 0.0, 0.0, 0.0],
///     vec![1.0, 0.0, 0.0, 0.0],
/// ];
/// let report = compare(star.clone(), star).unwrap();
/// assert!(report.all_cospectral());
/// assert_eq!(report.verdict(Representation::Adjacency), Some(&Verdict::Cospectral));
/// ```
pub fn compare<A, B>(left: A, right: B) -> Result<PairReport>
where
    A: IntoAdjacency,
    B: IntoAdjacency,
{
    SpectralComparator::default().compare(left, right)
}

impl From<SpectralError> for Verdict {
    fn from(e: SpectralError) -> Self {
        Verdict::Unavailable(e.to_string())
    }
}
