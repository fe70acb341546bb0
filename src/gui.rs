//! Pattern 2: Abstract Factory (GUI widgets)
//!
//! Each platform factory builds a whole family of widgets. The client picks
//! one factory up front and never mixes widgets from two platforms.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::CreationError;

// =============================================================================
// Families
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::MacOs];

    /// The platform chosen at build time: `--features windows`,
    /// `--features linux`, or MacOS when neither is enabled.
    pub const fn configured() -> Self {
        if cfg!(feature = "windows") {
            Platform::Windows
        } else if cfg!(feature = "linux") {
            Platform::Linux
        } else {
            Platform::MacOs
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "MacOS",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "mac" => Ok(Platform::MacOs),
            _ => Err(CreationError::UnknownPlatform(s.to_string())),
        }
    }
}

// =============================================================================
// Abstract products
// =============================================================================

pub trait Button {
    fn draw(&self) -> String;
    fn platform(&self) -> Platform;
}

pub trait Menu {
    fn draw(&self) -> String;
    fn platform(&self) -> Platform;
}

pub trait Dialog {
    fn draw(&self) -> String;
    fn platform(&self) -> Platform;
}

// =============================================================================
// Concrete products
// =============================================================================

// Every concrete widget draws its own type name.
macro_rules! widget {
    ($name:ident: $product:ident for $platform:expr) => {
        pub struct $name;

        impl $product for $name {
            fn draw(&self) -> String {
                stringify!($name).to_string()
            }

            fn platform(&self) -> Platform {
                $platform
            }
        }
    };
}

widget!(WindowsButton: Button for Platform::Windows);
widget!(WindowsMenu: Menu for Platform::Windows);
widget!(WindowsDialog: Dialog for Platform::Windows);

widget!(LinuxButton: Button for Platform::Linux);
widget!(LinuxMenu: Menu for Platform::Linux);
widget!(LinuxDialog: Dialog for Platform::Linux);

widget!(MacOSButton: Button for Platform::MacOs);
widget!(MacOSMenu: Menu for Platform::MacOs);
widget!(MacOSDialog: Dialog for Platform::MacOs);

// =============================================================================
// Factories
// =============================================================================

pub trait GuiFactory {
    fn platform(&self) -> Platform;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_menu(&self) -> Box<dyn Menu>;
    fn create_dialog(&self) -> Box<dyn Dialog>;
}

pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_menu(&self) -> Box<dyn Menu> {
        Box::new(WindowsMenu)
    }

    fn create_dialog(&self) -> Box<dyn Dialog> {
        Box::new(WindowsDialog)
    }
}

pub struct LinuxFactory;

impl GuiFactory for LinuxFactory {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxButton)
    }

    fn create_menu(&self) -> Box<dyn Menu> {
        Box::new(LinuxMenu)
    }

    fn create_dialog(&self) -> Box<dyn Dialog> {
        Box::new(LinuxDialog)
    }
}

pub struct MacOsFactory;

impl GuiFactory for MacOsFactory {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOSButton)
    }

    fn create_menu(&self) -> Box<dyn Menu> {
        Box::new(MacOSMenu)
    }

    fn create_dialog(&self) -> Box<dyn Dialog> {
        Box::new(MacOSDialog)
    }
}

pub fn factory_for(platform: Platform) -> Box<dyn GuiFactory> {
    debug!(%platform, "selected GUI factory");
    match platform {
        Platform::Windows => Box::new(WindowsFactory),
        Platform::Linux => Box::new(LinuxFactory),
        Platform::MacOs => Box::new(MacOsFactory),
    }
}

/// One full set of widgets from a single factory.
pub struct Widgets {
    pub button: Box<dyn Button>,
    pub menu: Box<dyn Menu>,
    pub dialog: Box<dyn Dialog>,
}

impl Widgets {
    pub fn from_factory(factory: &dyn GuiFactory) -> Self {
        Widgets {
            button: factory.create_button(),
            menu: factory.create_menu(),
            dialog: factory.create_dialog(),
        }
    }

    pub fn draw_all(&self) -> [String; 3] {
        [self.button.draw(), self.menu.draw(), self.dialog.draw()]
    }
}
