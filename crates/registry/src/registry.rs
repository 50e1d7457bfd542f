use naming_core::NamedEntity;

/// Ordered collection of entities addressed only through [`NamedEntity`].
///
/// - Insertion order is preserved
/// - Duplicates are allowed
/// - No removal or keyed lookup
///
/// Entries are stored as they are handed in, so a shared handle (such as a
/// `Vessel` clone) keeps aliasing the caller's value after it is pushed.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Box<dyn NamedEntity>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity.
    pub fn push<E>(&mut self, entity: E)
    where
        E: NamedEntity + 'static,
    {
        self.push_boxed(Box::new(entity));
    }

    pub fn push_boxed(&mut self, entity: Box<dyn NamedEntity>) {
        tracing::debug!(
            full_name = %entity.full_name(),
            position = self.entries.len(),
            "entity registered"
        );
        self.entries.push(entity);
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn NamedEntity> + '_ {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    /// Full names of every entry, in insertion order, computed now.
    pub fn full_names(&self) -> Vec<String> {
        self.iter().map(|entity| entity.full_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.full_names()).finish()
    }
}

impl FromIterator<Box<dyn NamedEntity>> for Registry {
    fn from_iter<I: IntoIterator<Item = Box<dyn NamedEntity>>>(iter: I) -> Self {
        let mut registry = Registry::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<Box<dyn NamedEntity>> for Registry {
    fn extend<I: IntoIterator<Item = Box<dyn NamedEntity>>>(&mut self, iter: I) {
        for entity in iter {
            self.push_boxed(entity);
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a dyn NamedEntity;
    type IntoIter = Box<dyn Iterator<Item = &'a dyn NamedEntity> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_entities::{Person, Vessel};
    use proptest::prelude::*;

    #[test]
    fn new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.full_names().is_empty());
    }

    #[test]
    fn mixes_people_and_vessels_in_insertion_order() {
        let mut registry = Registry::new();
        registry.push(Person::new("Violet Lavender Love"));
        registry.push(Vessel::prefixed("USS", "Enterprise"));
        registry.push(Vessel::named("Serenity"));

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.full_names(),
            vec!["Violet Lavender Love", "USS Enterprise", "Serenity"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let me = Person::new("Violet Lavender Love");
        let mut registry = Registry::new();
        registry.push(me.clone());
        registry.push(me);

        assert_eq!(
            registry.full_names(),
            vec!["Violet Lavender Love", "Violet Lavender Love"]
        );
    }

    #[test]
    fn pushed_vessel_handle_stays_aliased() {
        let enterprise = Vessel::prefixed("USS", "Enterprise");
        let mut registry = Registry::new();
        registry.push(enterprise.clone());

        enterprise.set_name("Lambda");

        assert_eq!(registry.full_names(), vec!["USS Lambda"]);
    }

    #[test]
    fn pushed_person_is_an_independent_copy() {
        let mut me = Person::new("Violet Lavender Love");
        let mut registry = Registry::new();
        registry.push(me.clone());

        me = Person::new("Someone Else");

        assert_eq!(me.full_name(), "Someone Else");
        assert_eq!(registry.full_names(), vec!["Violet Lavender Love"]);
    }

    #[test]
    fn collects_from_boxed_entities() {
        let boxed: Vec<Box<dyn NamedEntity>> = vec![
            Box::new(Vessel::named("Serenity")),
            Box::new(Person::new("Malcolm Reynolds")),
        ];
        let registry: Registry = boxed.into_iter().collect();

        let names: Vec<String> = (&registry).into_iter().map(|e| e.full_name()).collect();
        assert_eq!(names, vec!["Serenity", "Malcolm Reynolds"]);
    }

    #[test]
    fn debug_lists_full_names() {
        let mut registry = Registry::new();
        registry.push(Vessel::named("Serenity"));
        assert_eq!(format!("{registry:?}"), r#"["Serenity"]"#);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: iteration yields exactly what was pushed, in order.
        #[test]
        fn preserves_insertion_order(
            entries in prop::collection::vec(
                (any::<bool>(), "[A-Za-z]{1,10}"),
                0..20,
            )
        ) {
            let mut registry = Registry::new();
            let mut expected = Vec::new();

            for (is_vessel, name) in entries {
                if is_vessel {
                    let vessel = Vessel::prefixed("HMS", name);
                    expected.push(vessel.full_name());
                    registry.push(vessel);
                } else {
                    expected.push(name.clone());
                    registry.push(Person::new(name));
                }
            }

            prop_assert_eq!(registry.len(), expected.len());
            prop_assert_eq!(registry.full_names(), expected);
        }
    }
}
