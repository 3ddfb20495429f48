use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::domain::entities::dataset::DatasetOrigin;
use crate::usecase::ports::source::{IngestError, RawRow, RecordSource};

pub const DEFAULT_SAMPLE_ROWS: usize = 10_000;

const TITLE_WORDS: &[&str] = &[
    "amet", "aurora", "autem", "beatae", "brevis", "caelum", "cito", "delectus", "dolor",
    "dolore", "ea", "enim", "error", "facere", "fugit", "ignis", "ipsum", "iusto", "labore",
    "lorem", "lux", "magnam", "minus", "mollitia", "nemo", "nihil", "nobis", "omnis", "porro",
    "quasi", "quia", "ratione", "saepe", "sint", "tempora", "terra", "ullam", "umbra", "velit",
    "veritas", "vitae", "voluptas",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Beatrice", "Carlos", "Chen", "Dmitri", "Elena", "Farah", "Grace",
    "Hiro", "Imani", "Jonas", "Kai", "Lena", "Marta", "Nadia", "Omar", "Priya", "Quinn",
    "Rosa", "Sven", "Tariq", "Uma", "Viktor", "Wen", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes",
    "Ivanova", "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Schmidt", "Tanaka", "Underwood", "Vargas", "Walsh", "Yamada",
    "Zimmerman",
];

const GENRES: &[&str] = &[
    "Blues", "Classical", "Country", "Electronic", "Folk", "Funk", "Hip Hop", "Jazz", "Latin",
    "Metal", "Non Music", "Pop", "Rap", "Reggae", "Rock", "Soul", "Stage And Screen", "World",
];

const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1900..=2025;

/// Synthetic book rows for trying the editor without a file.
pub struct SampleSource {
    count: usize,
    rng: StdRng,
}

impl SampleSource {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(count: usize, seed: u64) -> Self {
        Self {
            count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn next_row(&mut self) -> RawRow {
        let title = (0..3)
            .map(|_| self.pick(TITLE_WORDS))
            .collect::<Vec<_>>()
            .join(" ");
        let author = format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES));
        let genre = self.pick(GENRES).to_string();
        let year = self.rng.gen_range(YEAR_RANGE).to_string();
        let isbn = Builder::from_random_bytes(self.rng.gen())
            .into_uuid()
            .to_string();
        [title, author, genre, year, isbn]
    }
}

impl RecordSource for SampleSource {
    fn origin(&self) -> DatasetOrigin {
        DatasetOrigin::Sample
    }

    fn read_rows(&mut self, on_row: &mut dyn FnMut(RawRow)) -> Result<(), IngestError> {
        for _ in 0..self.count {
            let row = self.next_row();
            on_row(row);
        }
        Ok(())
    }
}
