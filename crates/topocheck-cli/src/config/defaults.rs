use topocheck::engine::config::UnknownTypePolicy;

pub struct DefaultsConfig {
    pub unknown_type_policy: UnknownTypePolicy,
    pub show_progress: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            unknown_type_policy: UnknownTypePolicy::Accept,
            show_progress: true,
        }
    }
}
