use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Result;
use colored::Colorize;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Medium,
    OneLine,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    commit: Commit,
    is_head: bool,
}

impl LogEntry {
    pub fn commit(&self) -> &Commit {
        &self.commit
    }

    pub fn is_head(&self) -> bool {
        self.is_head
    }

    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Medium => self.render_medium(),
            LogFormat::OneLine => self.render_oneline(),
        }
    }

    fn render_medium(&self) -> String {
        let mut output = format!(
            "{}{}\n",
            format!("commit {}", self.commit.id()).yellow(),
            self.decoration()
        );
        output.push_str(&format!("Date:   {}\n\n", self.commit.readable_timestamp()));
        for message_line in self.commit.message().lines() {
            output.push_str(&format!("    {}\n", message_line));
        }

        output
    }

    fn render_oneline(&self) -> String {
        format!(
            "{}{} {}\n",
            self.commit.id().to_string().yellow(),
            self.decoration(),
            self.commit.short_message()
        )
    }

    fn decoration(&self) -> String {
        if self.is_head {
            format!(" ({})", "HEAD".cyan().bold())
        } else {
            String::new()
        }
    }
}

/// Restartable view over the commit history; each call to
/// [`CommitLog::entries`] reads the persisted commits again
#[derive(Clone, new)]
pub struct CommitLog<'r> {
    repository: &'r Repository,
}

impl<'r> CommitLog<'r> {
    pub fn entries(&self) -> Result<Vec<LogEntry>> {
        let head = self.repository.head_commit()?;

        Ok(self
            .repository
            .history()
            .list()?
            .into_iter()
            .map(|commit| {
                let is_head = head.as_ref() == Some(commit.id());
                LogEntry::new(commit, is_head)
            })
            .collect())
    }
}
