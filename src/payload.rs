//! Random request bodies for create/update requests
//!
//! Every field is drawn independently, so two payloads rarely match, but the
//! shape is always the same. The random source is a type parameter so tests
//! can pass a seeded generator.

use crate::error::Result;
use crate::models::{Category, CategoryName, HttpMethod, Payload, PetStatus, Tag};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chloe", "Dmitri", "Elena", "Felix", "Grace", "Hugo", "Ingrid", "Jonas",
    "Keiko", "Liam", "Maya", "Nico", "Olga", "Pablo", "Quinn", "Rosa", "Sami", "Tara",
];

const WORDS: &[&str] = &[
    "amber", "brisk", "cedar", "dune", "ember", "fable", "glade", "harbor", "ivory", "jolly",
    "kindle", "lunar", "maple", "nimble", "opal", "pebble", "quartz", "river", "sable", "tundra",
];

const IMAGE_SIZES: &[u32] = &[64, 128, 240, 320, 480, 640];

/// Produces schema-shaped [`Payload`]s from a random source.
#[derive(Debug, Clone)]
pub struct PayloadSynthesizer<R = StdRng> {
    rng: R,
}

impl PayloadSynthesizer<StdRng> {
    /// Synthesizer seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Synthesizer that produces the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for PayloadSynthesizer<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: RngCore> PayloadSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn synthesize(&mut self) -> Payload {
        let id = self.rng.random_range(1..=1000);
        let name = pick(&mut self.rng, FIRST_NAMES).to_string();
        let category = Category {
            id: self.rng.random_range(1..=10),
            name: *pick(&mut self.rng, &CategoryName::ALL),
        };
        let photo_url = self.image_url();
        let tag = Tag {
            id: self.rng.random_range(0..=50),
            name: pick(&mut self.rng, WORDS).to_string(),
        };
        let status = *pick(&mut self.rng, &PetStatus::ALL);

        Payload {
            id,
            name,
            category,
            photo_urls: vec![photo_url],
            tags: vec![tag],
            status,
        }
    }

    fn image_url(&mut self) -> String {
        let width = *pick(&mut self.rng, IMAGE_SIZES);
        let height = *pick(&mut self.rng, IMAGE_SIZES);
        format!("https://dummyimage.com/{}x{}", width, height)
    }
}

fn pick<'a, T, R: RngCore>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// File name a payload for `method` is persisted under.
pub fn payload_file_name(method: HttpMethod) -> String {
    format!("{}_payload.json", method.as_str().to_lowercase())
}

/// Write `payload` to `<dir>/<method>_payload.json`, replacing any previous file.
pub fn persist_payload(payload: &Payload, method: HttpMethod, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(payload_file_name(method));
    let json = serde_json::to_string_pretty(payload)?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_synthesized_payload_shape() {
        let mut synthesizer = PayloadSynthesizer::seeded(42);

        for _ in 0..200 {
            let payload = synthesizer.synthesize();
            assert!((1..=1000).contains(&payload.id));
            assert!((1..=10).contains(&payload.category.id));
            assert_eq!(payload.photo_urls.len(), 1);
            assert!(payload.photo_urls[0].starts_with("https://"));
            assert_eq!(payload.tags.len(), 1);
            assert!(payload.tags[0].id <= 50);
            assert!(!payload.tags[0].name.is_empty());
            assert!(!payload.name.is_empty());
            assert!(PetStatus::ALL.contains(&payload.status));
        }
    }

    #[test]
    fn test_same_seed_same_payload() {
        let first = PayloadSynthesizer::seeded(7).synthesize();
        let second = PayloadSynthesizer::seeded(7).synthesize();
        assert_eq!(first, second);
    }

    #[test]
    fn test_payload_file_name() {
        assert_eq!(payload_file_name(HttpMethod::Post), "post_payload.json");
        assert_eq!(payload_file_name(HttpMethod::Put), "put_payload.json");
    }

    #[test]
    fn test_persist_payload_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut synthesizer = PayloadSynthesizer::seeded(1);

        persist_payload(&synthesizer.synthesize(), HttpMethod::Post, dir.path()).unwrap();
        let latest = synthesizer.synthesize();
        let path = persist_payload(&latest, HttpMethod::Post, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("post_payload.json"));
        let written: Payload =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, latest);
    }
}
