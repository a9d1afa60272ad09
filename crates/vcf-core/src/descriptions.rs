//! Built-in descriptions of well-known INFO keys.
//!
//! INFO declarations without an explicit description look up their key in an
//! [`InfoDescriptions`] table, falling back to [`DEFAULT_INFO_DESCRIPTION`].

use std::collections::HashMap;

/// Placeholder used when neither the caller nor the table knows a key.
pub const DEFAULT_INFO_DESCRIPTION: &str = "<DEFAULT INFO FIELD DESCRIPTION>";

const BUILTIN: &[(&str, &str)] = &[
    ("ADP", "Average per-sample depth of bases with Phred score"),
    ("AF", "Allele frequency based on Flow Evaluator observation counts"),
    ("AO", "Alternate allele observations"),
    ("ASP", "Is Assembly specific. This is set if the variant only maps to one assembly"),
    ("ASS", "In acceptor splice site FxnCode = 73"),
    ("CDA", "Variation is interrogated in a clinical diagnostic assay"),
    ("DP", "Total read depth at the locus"),
    ("DSS", "In donor splice-site FxnCode = 75"),
    ("FAO", "Flow Evaluator Alternate allele observations"),
    ("FDP", "Flow Evaluator read depth at the locus"),
    ("FR", "Reason why the variant was filtered."),
    ("FRO", "Flow Evaluator Reference allele observations"),
    ("FSAF", "Flow Evaluator Alternate allele observations on the forward strand"),
    ("FSAR", "Flow Evaluator Alternate allele observations on the reverse strand"),
    ("FSRF", "Flow Evaluator Reference observations on the forward strand"),
    ("FSRR", "Flow Evaluator Reference observations on the reverse strand"),
    ("FWDB", "Forward strand bias in prediction."),
    ("FXX", "Flow Evaluator failed read ratio"),
    ("HET", "Number of samples called heterozygous-variant"),
    ("HOM", "Number of samples called homozygous-variant"),
    (
        "HRUN",
        "Run length: the number of consecutive repeats of the alternate allele in the reference genome",
    ),
    ("HS", "Indicate it is at a hot spot"),
    ("LEN", "allele length"),
    ("MLLD", "Mean log-likelihood delta per read."),
    ("NS", "Number of samples with data"),
    (
        "PB",
        "Bias of relative variant position in reference reads versus variant reads. Equals Mann-Whitney U rho statistic P(YX)+0.5P(Y=X)",
    ),
    (
        "PBP",
        "Pval of relative variant position in reference reads versus variant reads.  Related to GATK ReadPosRankSumTest",
    ),
    ("QD", "QualityByDepth as 4*QUAL/FDP (analogous to GATK)"),
    ("RBI", "Distance of bias parameters from zero."),
    ("REFB", "Reference Hypothesis bias in prediction."),
    ("REVB", "Reverse strand bias in prediction."),
    ("RO", "Reference allele observations"),
    ("SAF", "Alternate allele observations on the forward strand"),
    ("SAR", "Alternate allele observations on the reverse strand"),
    ("SRF", "Number of reference observations on the forward strand"),
    ("SRR", "Number of reference observations on the reverse strand"),
    ("SSEN", "Strand-specific-error prediction on negative strand."),
    ("SSEP", "Strand-specific-error prediction on positive strand."),
    ("SSSB", "Strand-specific strand bias for allele."),
    ("STB", "Strand bias in variant relative to reference."),
    ("STBP", "Pval of Strand bias in variant relative to reference."),
    ("TYPE", "The type of allele, either snp, mnp, ins, del, or complex."),
    ("U3", "In 3' UTR Location is in an untranslated region (UTR). FxnCode = 53"),
    ("U5", "In 5' UTR Location is in an untranslated region (UTR). FxnCode = 55"),
    ("VARB", "Variant Hypothesis bias in prediction."),
    ("VC", "Variation Class"),
    ("WT", "Number of samples called reference (wild-type)"),
];

/// Read-only lookup table from INFO key to human-readable description.
#[derive(Debug, Clone, Default)]
pub struct InfoDescriptions {
    entries: HashMap<String, String>,
}

impl InfoDescriptions {
    /// An empty table; every lookup falls back to the placeholder.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table of well-known INFO keys.
    pub fn builtin() -> Self {
        BUILTIN.iter().copied().collect()
    }

    /// Add or replace an entry.
    pub fn with(mut self, id: impl Into<String>, description: impl Into<String>) -> Self {
        self.entries.insert(id.into(), description.into());
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Resolve the description for `id`: explicit text if non-empty, else the
    /// table entry, else [`DEFAULT_INFO_DESCRIPTION`].
    pub fn resolve(&self, id: &str, explicit: Option<&str>) -> String {
        explicit
            .filter(|text| !text.is_empty())
            .or_else(|| self.get(id))
            .unwrap_or(DEFAULT_INFO_DESCRIPTION)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InfoDescriptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = InfoDescriptions::builtin();
        assert_eq!(table.get("DP"), Some("Total read depth at the locus"));
        assert_eq!(table.get("NOPE"), None);
        assert_eq!(table.len(), BUILTIN.len());
    }

    #[test]
    fn test_resolve_precedence() {
        let table = InfoDescriptions::builtin();

        assert_eq!(table.resolve("DP", Some("Custom")), "Custom");
        assert_eq!(table.resolve("DP", Some("")), "Total read depth at the locus");
        assert_eq!(table.resolve("DP", None), "Total read depth at the locus");
        assert_eq!(table.resolve("X", None), DEFAULT_INFO_DESCRIPTION);
    }

    #[test]
    fn test_empty_table_uses_placeholder() {
        let table = InfoDescriptions::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve("DP", None), DEFAULT_INFO_DESCRIPTION);
    }

    #[test]
    fn test_with_overrides_entry() {
        let table = InfoDescriptions::builtin().with("DP", "Depth");
        assert_eq!(table.resolve("DP", None), "Depth");
    }
}
