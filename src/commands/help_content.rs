//! Help and info document construction
//!
//! The four help documents depend only on the command prefix and the default
//! announcement templates, and are built once when the owning module is
//! created. They are not rebuilt when the defaults change later; calling
//! [`HelpContent::build`] again is the way to pick up new values.
//!
//! The info document reflects live state and is composed per request by
//! [`info_document`].
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: General, config, tzdata and message help; live info statistics

use log::warn;

use crate::commands::context::CommandContext;
use crate::core::{Document, Section, NAME_TOKEN};
use crate::features::{format_uptime, AnnouncementFormatter};

pub const TZDATA_LIST_URL: &str = "https://en.wikipedia.org/wiki/List_of_tz_database_time_zones";

/// Shown in place of a statistic that could not be read
pub const UNAVAILABLE: &str = "unavailable";

/// Labels of the info statistics, in display order
pub const INFO_FIELDS: [&str; 4] = ["Version", "Server count", "Shard", "Uptime"];

/// Precomputed help documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContent {
    pub general: Document,
    pub config: Document,
    pub tzdata: Document,
    pub message: Document,
}

impl HelpContent {
    /// Build every help document from the prefix and the current default templates
    pub fn build(prefix: &str, announcements: &dyn AnnouncementFormatter) -> Self {
        Self {
            general: general_help(prefix),
            config: config_help(prefix),
            tzdata: tzdata_help(),
            message: message_help(prefix, announcements),
        }
    }
}

/// Regular and moderator command overview
pub fn general_help(prefix: &str) -> Document {
    let p = |cmd: &str| format!("{prefix}{cmd}");

    let commands = Section::new("Commands")
        .entry(&[p("help"), p("info"), p("help-tzdata")], "Help and informational messages.")
        .entry(&[p("recent"), p("upcoming")], "Lists recent and upcoming birthdays.")
        .entry(&[p("set (date) [zone]")], "Registers your birth date. Time zone is optional.")
        .line(format!(
            " »» Examples: `{}`, `{}`.",
            p("set jan-31"),
            p("set 15-aug America/Los_Angeles")
        ))
        .entry(
            &[p("zone (zone)")],
            format!("Sets your local time zone. See `{}`.", p("help-tzdata")),
        )
        .entry(&[p("remove")], "Removes your birthday information from this bot.")
        .entry(&[p("when (user)")], "Displays birthday information of the given user.");

    let moderator = Section::new("Moderator commands")
        .entry(
            &[p("config")],
            format!("Edit bot configuration. See `{}`.", p("help-config")),
        )
        .entry(&[p("list")], "Exports all birthdays to file. Accepts `csv` as a parameter.")
        .entry(
            &[p("override (user ping or ID) (command w/ parameters)")],
            "Perform certain commands on behalf of another user.",
        );

    Document::new().section(commands).section(moderator)
}

/// `config` subcommand reference for moderators
pub fn config_help(prefix: &str) -> Document {
    let c = |sub: &str| format!("{prefix}config {sub}");

    let basic = Section::new("Basic settings")
        .entry(&[c("role (role name or ID)")], "Sets the role to apply to users having birthdays.")
        .entry(
            &[c("channel (channel name or ID)")],
            "Sets the announcement channel. Leave blank to disable.",
        )
        .entry(
            &[c("message (message)"), c("messagepl (message)")],
            format!("Sets a custom announcement message. See `{prefix}help-message`."),
        )
        .entry(
            &[c("ping (off|on)")],
            "Sets whether to ping the respective users in the announcement message.",
        )
        .entry(
            &[c("zone (time zone name)")],
            format!("Sets the default server time zone. See `{prefix}help-tzdata`."),
        );

    let access = Section::new("Access management")
        .entry(
            &[c("modrole (role name, role ping, or ID)")],
            format!(
                "Establishes a role for bot moderators. Grants access to `{prefix}config` and `{prefix}override`."
            ),
        )
        .entry(
            &[c("block/unblock (user ping or ID)")],
            "Prevents or allows usage of bot commands to the given user.",
        )
        .entry(
            &[c("moderated on/off")],
            "Prevents or allows using commands for all members excluding moderators.",
        );

    Document::new()
        .header(format!("{prefix}config subcommands"))
        .description("All the following subcommands are only usable by moderators and server managers.")
        .section(basic)
        .section(access)
}

/// Time zone explanation; does not depend on configuration
pub fn tzdata_help() -> Document {
    let section = Section::new("Time Zone Support")
        .line(
            "You may specify a time zone in order to have your birthday recognized with respect to your local time. \
             This bot only accepts zone names from the IANA Time Zone Database (a.k.a. Olson Database).",
        )
        .line("")
        .line(format!(
            "These names can be found at the following link, under the 'TZ database name' column: {TZDATA_LIST_URL}"
        ));

    Document::new().section(section)
}

/// Announcement message customization, with the defaults as examples
pub fn message_help(prefix: &str, announcements: &dyn AnnouncementFormatter) -> Document {
    let explanation = Section::new("Custom announcement message")
        .line(format!(
            "The `message` and `messagepl` subcommands allow for editing the message sent into the announcement \
             channel (defined with `{prefix}config channel`). This feature is separated across two commands:"
        ))
        .line(format!("● `{prefix}config message`"))
        .line(format!("● `{prefix}config messagepl`"))
        .line(
            "The first command sets the message to be displayed when *one* user is having a birthday. \
             The second command sets the message for when *two or more* users are having birthdays \
             ('pl' means plural). If only one of the two custom messages are defined, it will be used for both cases.",
        )
        .line("")
        .line(format!(
            "To further allow customization, you may place the token `{NAME_TOKEN}` in your message to specify \
             where the name(s) should appear."
        ))
        .line("Leave the parameter blank to clear or reset the message to its default value.");

    let examples = Section::new("Examples")
        .line("As examples, these are the default announcement messages used by this bot:")
        .line(format!("`message`: {}", announcements.default_singular()))
        .line(format!("`messagepl`: {}", announcements.default_plural()));

    Document::new().section(explanation).section(examples)
}

/// Live statistics for the info command
///
/// Always carries the four statistics in [`INFO_FIELDS`] order; a value that
/// cannot be read is shown as [`UNAVAILABLE`].
pub fn info_document(ctx: &CommandContext, guild_id: Option<u64>) -> Document {
    let status = &ctx.status;

    let version = Some(ctx.version.clone()).filter(|v| !v.is_empty());
    let guild_count = status.guild_count().map(|n| n.to_string());
    let shard = guild_id
        .and_then(|id| status.shard_for(id))
        .map(|shard| format!("#{shard}"));
    let uptime = status.uptime().map(format_uptime);

    let mut stats = Section::new("Statistics");
    for (label, value) in INFO_FIELDS.iter().zip([version, guild_count, shard, uptime]) {
        let value = value.unwrap_or_else(|| {
            warn!("Info statistic '{label}' unavailable");
            UNAVAILABLE.to_string()
        });
        stats = stats.line(format!("{label}: {value}"));
    }

    Document::new()
        .header("Thank you for using Birthday Bot!")
        .icon_url(status.avatar_url())
        .description(
            "Suggestions and feedback are always welcome. Please refer to the bot's listing for \
             information on reaching the support server.",
        )
        .section(stats)
}
