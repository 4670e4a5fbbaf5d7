//! Reply catalog - the fixed content every command answers with
//!
//! Wording here is user-facing server copy; change it only when the
//! server's rules change.

use crate::domain::entities::{Card, Payload};

const RULES_FOOTER: &str =
    "Rules are cumulative, and punishments may vary depending on the person. For more commands, type +help";
const MORE_COMMANDS_FOOTER: &str = "To see more commands, type +help";

/// One catalog row: the command identifier, a short summary, and its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub identifier: String,
    pub summary: String,
    pub payload: Payload,
}

/// Static identifier -> payload lookup, populated once at startup
#[derive(Debug, Clone, Default)]
pub struct ReplyCatalog {
    entries: Vec<CatalogEntry>,
}

impl ReplyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later definitions of the same identifier replace earlier ones
    pub fn define(&mut self, identifier: impl Into<String>, summary: impl Into<String>, payload: Payload) {
        let entry = CatalogEntry {
            identifier: identifier.into(),
            summary: summary.into(),
            payload,
        };
        match self.entries.iter_mut().find(|e| e.identifier == entry.identifier) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&Payload> {
        self.entries
            .iter()
            .find(|e| e.identifier == identifier)
            .map(|e| &e.payload)
    }

    /// Entries in definition order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The OlympusLand server content
    pub fn olympus() -> Self {
        let mut catalog = Self::new();

        catalog.define("help", "Show the command reference", help_card().into());

        catalog.define(
            "a",
            "Check that the bot is responding",
            Payload::text("The bot is working correctly"),
        );

        catalog.define(
            "store",
            "Donations and ranks page",
            Payload::text(
                "Visit our store to see our ranks and make donations ^.^ `https://olympusland.tebex.io`",
            ),
        );

        catalog.define(
            "ip",
            "Minecraft server address",
            Card::new("Minecraft Java Server", "Version 1.16.5 - 1.17.1: play.olympusland.xyz")
                .with_footer(MORE_COMMANDS_FOOTER)
                .into(),
        );

        catalog.define(
            "rules",
            "Rule categories",
            Payload::text(
                "The rules are classified as major, minor, staff, and trial. To view them, type `+major` `+minor` `+staff` `+trial` `+clans`",
            ),
        );

        catalog.define(
            "minor",
            "Minor rules",
            Card::new(
                "Minor Rules",
                concat!(
                    "1) Bugs are allowed, but you must first check with staff for permission. \n",
                    "2) Do not insult other players if they do not appreciate it. \n",
                    "3) Avoid flooding (e.g., helloooooo), spamming, or unnecessary text that clutters the chat. \n",
                    "4) More than two Redstone clocks are not allowed; lag generators and chunk loaders are prohibited. \n",
                    "5) Pets are private property; it is forbidden to kill them intentionally, even if they are in an unprotected area. \n",
                    "6) Wolves cannot be used as weapons for PvP. \n",
                    "7) In isolated issues, staff may hold meetings to find a fair solution. \n",
                    "8) Do not leave a trial.",
                ),
            )
            .with_footer(RULES_FOOTER)
            .into(),
        );

        catalog.define(
            "major",
            "Major rules",
            Card::new(
                "Major Rules",
                concat!(
                    "1) The use of multiple accounts is prohibited. If you want to change accounts, notify staff to transfer your items and properties. \n",
                    "2) Hacks are prohibited and will be sanctioned with an IP ban. \n",
                    "3) Destroying protected builds and stealing items in other players\u{2019} areas is prohibited. \n",
                    "4) Any type of killing, such as tpakill and spawn kill, is prohibited. \n",
                    "5) Exploiting bugs, such as duplication or mobility glitches, is prohibited. \n",
                    "6) The use of hacks like xray or autoclick is prohibited. \n",
                    "7) External links cannot be distributed without staff approval. \n",
                    "8) Respect staff and avoid disrespectful behavior. \n",
                    "9) Attempting to evade penalties will increase the punishment; helping another player evade is also punishable. \n",
                    "10) Lying to staff is prohibited. \n",
                    "11) Impersonating staff is prohibited. \n",
                    "12) Do not use other cases to justify actions. \n",
                    "13) Offensive messages and builds are prohibited. \n",
                    "14) Escaping jail is prohibited. \n",
                    "15) Do not help a prisoner escape jail. \n",
                    "16) Do not explore, mine, or cut trees in the normal world; use /warp resources.",
                ),
            )
            .with_footer(RULES_FOOTER)
            .into(),
        );

        catalog.define(
            "trial",
            "Rules that apply during a trial",
            Card::new(
                "Trial Rules",
                concat!(
                    "1) Do not interrupt the trial. \n",
                    "2) Present evidence. \n",
                    "3) Do not waste the judge\u{2019}s time. \n",
                    "4) Read the rules before requesting a trial. \n",
                    "5) Only witnesses and involved parties are allowed in the trial. \n",
                    "6) Only Owners, Admins, and Mods can act as judges. \n",
                    "7) Both parties (accused and accusers) must be present.",
                ),
            )
            .with_footer(RULES_FOOTER)
            .into(),
        );

        catalog.define(
            "clans",
            "Clan rules",
            Card::new(
                "Clan Rules",
                concat!(
                    "1) Any type of PvP is allowed if both players belong to a clan. \n",
                    "2) Griefing is allowed but only to clan bases.",
                ),
            )
            .with_footer(RULES_FOOTER)
            .into(),
        );

        catalog.define(
            "staff",
            "Staff rules",
            Card::new(
                "Staff Rules",
                concat!(
                    "1) Ban complaints are handled via Discord. \n",
                    "2) Staff-exclusive items should not fall into players\u{2019} hands; both involved will be sanctioned if this happens. \n",
                    "3) Respond to players\u{2019} questions. \n",
                    "4) Greet new players. \n",
                    "5) Do not abuse power. \n",
                    "6) Only Owners, Admins, and Mods can sanction. \n",
                    "7) Treat all players equally. \n",
                    "8) Do not give players creative items; only survival items are allowed. \n",
                    "9) Be neutral in trials. \n",
                    "10) Unjustified inactivity may result in staff dismissal. \n",
                    "11) Do not reveal upcoming features to players.",
                ),
            )
            .with_footer(RULES_FOOTER)
            .into(),
        );

        catalog.define(
            "commands",
            "In-game commands",
            Card::new(
                "Commands you can use on the server",
                concat!(
                    "/tpa (teleport to another player) \n",
                    "/tpaccept (accept teleport request) \n",
                    "/tpahere (bring another player) \n",
                    "/back (return to the previous location) \n",
                    "/sit (sit down) \n",
                    "/afk (go AFK) \n",
                    "/sethome (mark a home) \n",
                    "/home \"name\" (go to a marked home) \n",
                    "/delhome \"name\" (delete a home) \n",
                    "/ps add \"name\" (add a person to your protection stone) \n",
                    "/ps remove \"name\" (remove a person from your stone) \n",
                    "/store (see the store) \n",
                    "/stones (information about the protection stone) \n",
                    "/jobs (to earn money) \n",
                    "/jobs join \"name\" (join a job) \n",
                    "/jobs remove \"name\" (leave a job) \n",
                    "/ec (access ender chest) \n",
                    "/pay \"amount\" \"nickname\" (pay another player) \n",
                    "/money (see your money) \n",
                    "/baltop (view the richest people on Olympus) \n",
                    "/ah (auction house) \n",
                    "/ah sell \"price\" (sell item in hand in ah) \n",
                    "/store (buy stones, turrets, etc.) \n",
                    "/warp resources (for material gathering, building here is not recommended) \n",
                    "/warp slaughterhouse (get food) \n",
                    "/warp wedding (church) \n\n",
                    "You can create elevators by placing a quartz block with a redstone block underneath.",
                ),
            )
            .with_footer(MORE_COMMANDS_FOOTER)
            .into(),
        );

        catalog
    }
}

fn help_card() -> Card {
    Card::new(
        "Commands",
        "Here are the commands you can use to enhance your experience on Discord and in the Minecraft server.",
    )
    .with_field("`+ip`", "Displays the IP of the Minecraft server.")
    .with_field(
        "`+rules`",
        "Classification of Minecraft server rules: major, minor, trial, and staff.",
    )
    .with_field("`+minor`", "Displays minor rules.")
    .with_field("`+major`", "Displays major rules.")
    .with_field("`+trial`", "Displays rules applicable in trial.")
    .with_field("`+staff`", "Displays Minecraft staff rules.")
    .with_field("`+clans`", "Displays clan rules.")
    .with_field("`+commands`", "List of commands you can use on the server.")
    .with_field("`+store`", "Donations and ranks page.")
    .with_field(
        "Emergency",
        "To report a bug or issue with OlympusBot, contact the creator Paulidex.",
    )
    .with_footer("For hiring, contact Paulidex#9510.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Color;

    const IDENTIFIERS: [&str; 11] = [
        "help", "a", "store", "ip", "rules", "minor", "major", "trial", "clans", "staff", "commands",
    ];

    #[test]
    fn test_olympus_defines_every_command() {
        let catalog = ReplyCatalog::olympus();
        assert_eq!(catalog.len(), IDENTIFIERS.len());
        for id in IDENTIFIERS {
            assert!(catalog.get(id).is_some(), "missing {}", id);
        }
        assert!(catalog.get("clan").is_none());
        assert!(catalog.get("Help").is_none());
    }

    #[test]
    fn test_get_is_idempotent() {
        let catalog = ReplyCatalog::olympus();
        for id in IDENTIFIERS {
            assert_eq!(catalog.get(id), catalog.get(id));
        }
    }

    #[test]
    fn test_every_card_is_purple_with_footer() {
        let catalog = ReplyCatalog::olympus();
        for entry in catalog.entries() {
            if let Some(card) = entry.payload.as_card() {
                assert_eq!(card.color, Color::PURPLE, "{}", entry.identifier);
                assert!(card.footer.is_some(), "{}", entry.identifier);
            }
        }
    }

    #[test]
    fn test_rule_bodies_are_numbered() {
        let catalog = ReplyCatalog::olympus();
        let count = |id: &str| {
            catalog
                .get(id)
                .and_then(Payload::as_card)
                .map(|c| c.body.lines().count())
                .unwrap_or(0)
        };
        assert_eq!(count("minor"), 8);
        assert_eq!(count("major"), 16);
        assert_eq!(count("trial"), 7);
        assert_eq!(count("clans"), 2);
        assert_eq!(count("staff"), 11);
    }

    #[test]
    fn test_help_lists_clans_and_emergency_contact() {
        let catalog = ReplyCatalog::olympus();
        let help = catalog.get("help").and_then(Payload::as_card).cloned().unwrap();
        assert_eq!(help.fields.len(), 10);
        assert!(help.fields.iter().any(|f| f.name == "`+clans`"));
        assert_eq!(help.fields.last().map(|f| f.name.as_str()), Some("Emergency"));
        assert_eq!(help.footer.as_deref(), Some("For hiring, contact Paulidex#9510."));
    }

    #[test]
    fn test_define_replaces_in_place() {
        let mut catalog = ReplyCatalog::new();
        catalog.define("x", "first", Payload::text("1"));
        catalog.define("y", "second", Payload::text("2"));
        catalog.define("x", "again", Payload::text("3"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].identifier, "x");
        assert_eq!(catalog.get("x"), Some(&Payload::text("3")));
    }
}
