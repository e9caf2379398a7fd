//! Ordered collection of available tools with a current selection.

use super::tool::Tool;
use log::{debug, warn};

/// Default sticker glyph size in canvas pixels.
pub const DEFAULT_STICKER_SIZE: f64 = 32.0;

/// Holds the available tools in display order and tracks which one is current.
///
/// The registry is never empty, so [`ToolRegistry::current`] always has an answer.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
    current: usize,
}

impl ToolRegistry {
    /// Builds a registry from `tools`, keeping the first occurrence of each name.
    ///
    /// Falls back to [`ToolRegistry::default_tools`] when nothing usable is left.
    pub fn new(tools: impl IntoIterator<Item = Tool>) -> Self {
        let mut registry = Self {
            tools: Vec::new(),
            current: 0,
        };
        for tool in tools {
            let name = tool.name().to_owned();
            if !registry.register(tool) {
                warn!("Ignoring duplicate tool name '{name}'");
            }
        }
        if registry.tools.is_empty() {
            registry.tools = Self::default_tools();
        }
        registry
    }

    /// The built-in tool set: two markers followed by three stickers.
    pub fn default_tools() -> Vec<Tool> {
        vec![
            Tool::marker("thin", 2.0),
            Tool::marker("thick", 6.0),
            Tool::sticker("🙂", "🙂", DEFAULT_STICKER_SIZE),
            Tool::sticker("🌮", "🌮", DEFAULT_STICKER_SIZE),
            Tool::sticker("⭐", "⭐", DEFAULT_STICKER_SIZE),
        ]
    }

    /// All tools in registration order.
    pub fn list(&self) -> &[Tool] {
        &self.tools
    }

    /// The currently selected tool.
    pub fn current(&self) -> &Tool {
        &self.tools[self.current]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name() == name)
    }

    /// Selects the tool called `name`.
    ///
    /// Unknown names select the first registered tool instead of failing.
    /// This forgiving fallback hides typos; it is kept for compatibility with
    /// existing hosts and only surfaces as a warning in the log.
    pub fn select(&mut self, name: &str) {
        match self.tools.iter().position(|tool| tool.name() == name) {
            Some(index) => {
                self.current = index;
                debug!("Selected tool '{name}'");
            }
            None => {
                self.current = 0;
                warn!(
                    "Unknown tool '{name}', falling back to '{}'",
                    self.tools[0].name()
                );
            }
        }
    }

    /// Appends `tool` without changing the selection.
    ///
    /// Returns `false` (and registers nothing) if the name is already taken.
    pub fn register(&mut self, tool: Tool) -> bool {
        if self.contains(tool.name()) {
            return false;
        }
        self.tools.push(tool);
        true
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(Self::default_tools())
    }
}
