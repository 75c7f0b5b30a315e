use crate::seq::Nucleotide;

/// Base composition of the DNA characters found in a string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    counts: [usize; 4],
}

impl Composition {
    pub fn count(&self, nuc: Nucleotide) -> usize {
        self.counts[nuc as usize]
    }

    /// Number of valid nucleotide characters.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Percentage of `nuc` among valid nucleotides. 0.0 when there are none.
    pub fn percent(&self, nuc: Nucleotide) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(nuc) as f64 * 100.0 / total as f64
    }

    pub fn percentages(&self) -> [(Nucleotide, f64); 4] {
        Nucleotide::ALL.map(|nuc| (nuc, self.percent(nuc)))
    }

    pub fn cg_percent(&self) -> f64 {
        Nucleotide::ALL
            .iter()
            .filter(|nuc| nuc.is_c_or_g())
            .map(|&nuc| self.percent(nuc))
            .sum()
    }

    /// C+G and A+T counts.
    fn cg_at_counts(&self) -> (usize, usize) {
        Nucleotide::ALL.iter().fold((0, 0), |(cg, at), &nuc| {
            if nuc.is_c_or_g() {
                (cg + self.count(nuc), at)
            } else {
                (cg, at + self.count(nuc))
            }
        })
    }

    /// (C+G)/(A+T), taken from raw counts. Reported as 0.0 whenever A+T is
    /// zero, including sequences made only of C and G.
    pub fn cg_at_ratio(&self) -> f64 {
        let (cg, at) = self.cg_at_counts();
        if at == 0 {
            0.0
        } else {
            cg as f64 / at as f64
        }
    }
}

/// Counts A, C, G and T in `text`, skipping every other character.
pub fn calculate_stats(text: &str) -> Composition {
    let mut composition = Composition::default();
    for nuc in text.bytes().filter_map(Nucleotide::from_byte) {
        composition.counts[nuc as usize] += 1;
    }
    composition
}
