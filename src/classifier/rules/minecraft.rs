use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Minecraft,
    needles: &["minecraft"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .number("Port", facts.host_port("25565/tcp"))
        .text("Version", facts.env("VERSION"))
        .text("Type", facts.env("TYPE"))
        .text("Difficulty", facts.env("DIFFICULTY"))
        .number("Max Players", facts.env_number("MAX_PLAYERS"))
        .text("MOTD", facts.env("MOTD"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_server_settings() {
        let got = extract_with(
            &ENTRY,
            "itzg/minecraft-server",
            &[
                "EULA=TRUE",
                "VERSION=1.21.1",
                "TYPE=PAPER",
                "DIFFICULTY=hard",
                "MAX_PLAYERS=20",
                "MOTD=hello",
            ],
            &[("25565/tcp", "25565")],
        );
        assert_eq!(
            got,
            fields(&[
                ("Port", "25565"),
                ("Version", "1.21.1"),
                ("Type", "PAPER"),
                ("Difficulty", "hard"),
                ("Max Players", "20"),
                ("MOTD", "hello"),
            ])
        );
    }
}
