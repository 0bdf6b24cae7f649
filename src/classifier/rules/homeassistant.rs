use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::HomeAssistant,
    needles: &["homeassistant", "home-assistant"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Time Zone", facts.env("TZ"))
        .number("Port", facts.host_port("8123/tcp"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_both_image_spellings() {
        assert!(ENTRY.matches("ghcr.io/home-assistant/home-assistant:stable"));
        assert!(ENTRY.matches("homeassistant/home-assistant"));
        assert!(!ENTRY.matches("assistant"));
    }
}
