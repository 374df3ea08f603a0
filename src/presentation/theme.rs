use colored::Colorize;

pub struct Theme {
    pub output: fn(&str) -> String,
    pub provider: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub meta: fn(&str) -> String,
    pub error: fn(&str) -> String,
    pub hint: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" | "" => Self::default_theme(),
            "mono" => Self::mono(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::default_theme()
            }
        }
    }

    fn default_theme() -> Self {
        Self {
            output: |s| s.bright_white().bold().to_string(),
            provider: |s| s.cyan().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            meta: |s| s.bright_black().to_string(),
            error: |s| s.red().bold().to_string(),
            hint: |s| s.yellow().to_string(),
        }
    }

    fn mono() -> Self {
        Self {
            output: |s| s.bold().to_string(),
            provider: |s| s.italic().to_string(),
            line: |s| s.to_string(),
            meta: |s| s.dimmed().to_string(),
            error: |s| s.bold().to_string(),
            hint: |s| s.to_string(),
        }
    }
}
