//! Discrepancy notifications.
//!
//! Channels are switched on by the presence of their setting. Delivery is
//! not wired to any service: each enabled channel announces itself on the
//! console.

use crate::config::NotificationConfig;
use crate::models::discrepancy::DiscrepancyRecord;
use crate::ui::messages::info;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Slack,
    Discord,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Slack => "Slack",
            Channel::Discord => "Discord",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Channel::Email => "📧",
            Channel::Slack => "💬",
            Channel::Discord => "🎮",
        }
    }
}

pub fn enabled_channels(cfg: &NotificationConfig) -> Vec<Channel> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    let mut out = Vec::new();
    if present(&cfg.email_smtp_server) {
        out.push(Channel::Email);
    }
    if present(&cfg.slack_webhook_url) {
        out.push(Channel::Slack);
    }
    if present(&cfg.discord_webhook_url) {
        out.push(Channel::Discord);
    }
    out
}

pub trait Notifier {
    /// Called once per processed file, whether or not anything was found.
    fn notify(&self, source: &Path, found: &[DiscrepancyRecord]);
}

pub struct ConsoleNotifier {
    channels: Vec<Channel>,
}

impl ConsoleNotifier {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    pub fn from_config(cfg: &NotificationConfig) -> Self {
        Self::new(enabled_channels(cfg))
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, source: &Path, found: &[DiscrepancyRecord]) {
        for channel in &self.channels {
            tracing::debug!(channel = channel.label(), file = %source.display(), "notification stub");
            info(format!(
                "{} {} notification would be sent here ({} discrepancies in {})",
                channel.icon(),
                channel.label(),
                found.len(),
                source.display()
            ));
        }
    }
}
