use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

pub type ActionFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>>>>;
pub type CommandAction = Rc<dyn Fn() -> ActionFuture>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Window,
    Clipboard,
    Appearance,
    General,
    Navigation,
    Editor,
    Debug,
}

impl CommandCategory {
    pub fn label(self) -> &'static str {
        match self {
            CommandCategory::Window => "Window",
            CommandCategory::Clipboard => "Clipboard",
            CommandCategory::Appearance => "Appearance",
            CommandCategory::General => "General",
            CommandCategory::Navigation => "Navigation",
            CommandCategory::Editor => "Editor",
            CommandCategory::Debug => "Debug",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone)]
pub struct Command {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub shortcut: Option<String>,
    pub category: CommandCategory,
    pub action: CommandAction,
}

impl Command {
    pub fn new<F, Fut>(id: &str, label: &str, category: CommandCategory, action: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<()>> + 'static,
    {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: None,
            shortcut: None,
            category,
            action: Rc::new(move || Box::pin(action()) as ActionFuture),
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("shortcut", &self.shortcut)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct CommandGroup<'a> {
    pub category: CommandCategory,
    pub commands: Vec<&'a Command>,
}

/// Group commands by category in first-seen order, keeping input order inside
/// each group.
pub fn group_commands<'a, I>(commands: I) -> Vec<CommandGroup<'a>>
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut groups: Vec<CommandGroup<'a>> = Vec::new();
    for command in commands {
        match groups.iter_mut().find(|g| g.category == command.category) {
            Some(group) => group.commands.push(command),
            None => groups.push(CommandGroup {
                category: command.category,
                commands: vec![command],
            }),
        }
    }
    groups
}

pub const EMPTY_RESULTS_TEXT: &str = "No results found.";

pub struct CommandPalette {
    open: bool,
    commands: Vec<Command>,
    matcher: SkimMatcherV2,
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CommandPalette {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            open: false,
            commands,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        if self.open != open {
            tracing::debug!(open, "command palette visibility changed");
        }
        self.open = open;
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.open);
        self.open
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn groups(&self) -> Vec<CommandGroup<'_>> {
        group_commands(&self.commands)
    }

    /// Groups whose labels fuzzy-match `query`. A blank query keeps everything.
    pub fn search(&self, query: &str) -> Vec<CommandGroup<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return self.groups();
        }
        group_commands(
            self.commands
                .iter()
                .filter(|c| self.matcher.fuzzy_match(&c.label, query).is_some()),
        )
    }

    /// Close the palette, then start the command's action without awaiting it.
    ///
    /// Must be called inside a `tokio::task::LocalSet`. Returns `false` when no
    /// command has this id.
    pub fn run_command(&mut self, id: &str) -> bool {
        let Some(command) = self.commands.iter().find(|c| c.id == id) else {
            tracing::warn!(id, "unknown palette command");
            return false;
        };
        let action = Rc::clone(&command.action);
        let id = command.id.clone();
        self.set_open(false);

        tokio::task::spawn_local(async move {
            if let Err(err) = action().await {
                tracing::warn!(%id, error = %err, "palette command failed");
            }
        });
        true
    }
}
