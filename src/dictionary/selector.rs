// Variant selection - strategy for choosing one pronunciation from a word's
// listed variants

use super::Pronunciation;

/// Strategy for selecting a pronunciation from a word's variant list.
///
/// The list is in source-file order. Returns None only for an empty list.
pub trait VariantSelector {
    fn select<'a>(&self, variants: &'a [Pronunciation]) -> Option<&'a Pronunciation>;
}

/// Default policy: the first listed pronunciation is treated as canonical
/// (the CMU dictionary lists the most common pronunciation first)
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstVariant;

impl VariantSelector for FirstVariant {
    fn select<'a>(&self, variants: &'a [Pronunciation]) -> Option<&'a Pronunciation> {
        variants.first()
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
