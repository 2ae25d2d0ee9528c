//! Fill resolution: turns the caller's tags to fill into concrete values.

use crate::classifier::{classify, TagDictionary};
use crate::constants::PATIENT_ID_KEYWORD;
use crate::generators::{generator_for, patient_id_generator, Generator};
use crate::input::TagSpecs;
use crate::{FillError, FillResult};
use filldcm_types::{SexHint, TagKeyword, TagValue};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::BTreeMap;

/// Tags to fill with a concrete value for every keyword.
pub type ResolvedTags = BTreeMap<TagKeyword, TagValue>;

/// Generates values for the tags that the caller left unspecified.
///
/// The resolver owns its random source, so a seeded resolver produces the same values for the
/// same input.
pub struct FillResolver<R = StdRng> {
    rng: R,
}

impl FillResolver<StdRng> {
    /// A resolver seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A reproducible resolver.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> FillResolver<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Resolves every tag to fill to a concrete value.
    ///
    /// Literal values are kept as given. Tags without a value get one from the generator of
    /// their VR; `hint` only affects person names. The input is not modified.
    ///
    /// # Errors
    ///
    /// - [`FillError::UnknownField`] if a tag without value is not in `dictionary`
    /// - [`FillError::UnsupportedType`] if its VR has no generator
    pub fn resolve(
        &mut self,
        tags_to_fill: &TagSpecs,
        dictionary: &dyn TagDictionary,
        hint: Option<SexHint>,
    ) -> FillResult<ResolvedTags> {
        let mut resolved = ResolvedTags::new();
        for (tag, value) in tags_to_fill {
            let value = match value {
                Some(literal) => literal.clone(),
                None => {
                    let generate = generator(tag, dictionary)?;
                    let generated = generate(&mut self.rng, hint);
                    tracing::debug!(tag = %tag, value = %generated, "generated value");
                    generated
                }
            };
            resolved.insert(tag.clone(), value);
        }
        Ok(resolved)
    }
}

fn generator(tag: &TagKeyword, dictionary: &dyn TagDictionary) -> FillResult<Generator> {
    let type_tag = classify(dictionary, tag.as_str())?;
    if tag.as_str() == PATIENT_ID_KEYWORD {
        return Ok(patient_id_generator());
    }
    generator_for(type_tag).ok_or_else(|| FillError::UnsupportedType {
        field: tag.to_string(),
        type_tag,
    })
}
