use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A single DNA base.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Parses an ascii byte. Only upper-case bases are accepted.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    pub const fn is_c_or_g(self) -> bool {
        matches!(self, Nucleotide::C | Nucleotide::G)
    }
}

/// Builds the random source shared by generation and name insertion.
/// `None` seeds from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn rand_nucleotide(rng: &mut impl Rng) -> Nucleotide {
    Nucleotide::ALL[rng.gen_range(0..4)]
}

/// Draws `length` bases uniformly from A, C, G, T.
pub fn generate_dna_sequence(length: usize, rng: &mut impl Rng) -> String {
    let sequence: String = (0..length).map(|_| rand_nucleotide(rng).as_char()).collect();
    debug!("generated {} bases", sequence.len());
    sequence
}

/// A sequence with a foreign block spliced in at a recorded position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedSequence {
    sequence: String,
    position: usize,
    name_len: usize,
}

impl AnnotatedSequence {
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    /// Character offset at which the name starts.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn name(&self) -> &str {
        let (start, end) = self.name_byte_range();
        &self.sequence[start..end]
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Removes the inserted name, giving back the original sequence.
    pub fn strip_name(&self) -> String {
        let (start, end) = self.name_byte_range();
        let mut original = String::with_capacity(self.sequence.len() - (end - start));
        original.push_str(&self.sequence[..start]);
        original.push_str(&self.sequence[end..]);
        original
    }

    fn name_byte_range(&self) -> (usize, usize) {
        let start = char_to_byte(&self.sequence, self.position);
        let end = char_to_byte(&self.sequence, self.position + self.name_len);
        (start, end)
    }
}

fn char_to_byte(s: &str, char_pos: usize) -> usize {
    s.char_indices().nth(char_pos).map(|(i, _)| i).unwrap_or(s.len())
}

/// Splices `name` into `sequence` at a uniformly drawn position in
/// `[0, len]`, both ends included. Consumes exactly one draw from `rng`.
pub fn insert_name(sequence: &str, name: &str, rng: &mut impl Rng) -> AnnotatedSequence {
    let len = sequence.chars().count();
    let position = rng.gen_range(0..=len);
    let split = char_to_byte(sequence, position);

    let mut spliced = String::with_capacity(sequence.len() + name.len());
    spliced.push_str(&sequence[..split]);
    spliced.push_str(name);
    spliced.push_str(&sequence[split..]);
    debug!("inserted {:?} at position {}", name, position);

    AnnotatedSequence {
        sequence: spliced,
        position,
        name_len: name.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = generate_dna_sequence(500, &mut seeded_rng(Some(42)));
        let b = generate_dna_sequence(500, &mut seeded_rng(Some(42)));
        assert_eq!(a, b);
        let c = generate_dna_sequence(500, &mut seeded_rng(Some(43)));
        assert_ne!(a, c);
    }

    #[test]
    fn generated_bases_are_dna() {
        let seq = generate_dna_sequence(1000, &mut seeded_rng(Some(7)));
        assert_eq!(seq.len(), 1000);
        assert!(seq.bytes().all(|b| Nucleotide::from_byte(b).is_some()));
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(generate_dna_sequence(0, &mut seeded_rng(Some(1))), "");
    }

    #[test]
    fn all_four_bases_show_up() {
        let seq = generate_dna_sequence(400, &mut seeded_rng(Some(3)));
        for nuc in Nucleotide::ALL {
            assert!(seq.contains(nuc.as_char()), "missing {:?}", nuc);
        }
    }

    #[test]
    fn insertion_preserves_original() {
        let mut rng = seeded_rng(Some(42));
        for len in [0usize, 1, 2, 10, 61] {
            let seq = generate_dna_sequence(len, &mut rng);
            for name in ["", "Mike", "Zoë Ąna", "a b"] {
                let annotated = insert_name(&seq, name, &mut rng);
                assert_eq!(annotated.len(), len + name.chars().count());
                assert!(annotated.position() <= len);
                assert_eq!(annotated.name(), name);
                assert!(annotated.as_str().contains(name));
                assert_eq!(annotated.strip_name(), seq);
            }
        }
    }

    #[test]
    fn insertion_reaches_both_ends() {
        let mut rng = seeded_rng(Some(11));
        let mut seen_start = false;
        let mut seen_end = false;
        for _ in 0..200 {
            let annotated = insert_name("AC", "x", &mut rng);
            match annotated.position() {
                0 => seen_start = true,
                2 => seen_end = true,
                _ => {}
            }
        }
        assert!(seen_start && seen_end);
    }

    #[test]
    fn insertion_into_empty_sequence() {
        let annotated = insert_name("", "Mike", &mut seeded_rng(Some(5)));
        assert_eq!(annotated.position(), 0);
        assert_eq!(annotated.as_str(), "Mike");
        assert_eq!(annotated.strip_name(), "");
    }

    #[test]
    fn seeded_pipeline_is_reproducible() {
        let run = || {
            let mut rng = seeded_rng(Some(42));
            let seq = generate_dna_sequence(10, &mut rng);
            insert_name(&seq, "Mike", &mut rng)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn byte_parsing_is_case_sensitive() {
        assert_eq!(Nucleotide::from_byte(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_byte(b'g'), None);
        assert_eq!(Nucleotide::from_byte(b'N'), None);
        assert!(Nucleotide::C.is_c_or_g());
        assert!(!Nucleotide::T.is_c_or_g());
    }
}
