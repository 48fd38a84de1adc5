use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{get_config_path, Config, ThemeSetting};
use crate::scoring::{ScoringConfig, SuggestionOrder, DEFAULT_MAX_SUGGESTIONS, RULES};

/// Line-oriented prompt over any reader/writer pair
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Prompt user with a message and return their trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write output")?;
        self.output.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed before the wizard finished");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt with a default value. Returns default if input is empty.
    fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Prompt with a yes/no question. Returns bool based on input and default.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    /// Keep asking until `parse` accepts the answer
    fn prompt_until<T>(
        &mut self,
        message: &str,
        default: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T> {
        loop {
            let input = self.prompt_with_default(message, default)?;
            match parse(&input) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&format!("  Invalid: {}. Try again.", e))?,
            }
        }
    }
}

pub(crate) fn parse_max_suggestions(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    if n == 0 || n > RULES.len() {
        return Err(format!("must be between 1 and {}", RULES.len()));
    }
    Ok(n)
}

pub(crate) fn parse_suggestion_order(s: &str) -> Result<SuggestionOrder, String> {
    match s.to_lowercase().as_str() {
        "rule-order" | "rule" => Ok(SuggestionOrder::RuleOrder),
        "severity" => Ok(SuggestionOrder::Severity),
        other => Err(format!("unknown order '{}', use 'rule-order' or 'severity'", other)),
    }
}

pub(crate) fn parse_theme(s: &str) -> Result<ThemeSetting, String> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(ThemeSetting::Auto),
        "dark" => Ok(ThemeSetting::Dark),
        "light" => Ok(ThemeSetting::Light),
        other => Err(format!("unknown theme '{}', use auto, dark or light", other)),
    }
}

pub(crate) fn parse_refresh_interval(s: &str) -> Result<String, String> {
    let d = humantime::parse_duration(s).map_err(|e| e.to_string())?;
    if d < Duration::from_millis(100) || d > Duration::from_secs(3600) {
        return Err("must be between 100ms and 1h".to_string());
    }
    Ok(s.to_string())
}

/// Run the interactive init wizard on stdin/stdout.
///
/// If `default_path` is Some, offers that as the config file path.
/// Otherwise offers the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let default_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    run_init_wizard_with(stdin.lock(), stdout.lock(), &default_path).map(|_| ())
}

/// Wizard body. Returns the path written, or None if the user aborted.
pub fn run_init_wizard_with<R: BufRead, W: Write>(
    input: R,
    output: W,
    default_path: &Path,
) -> Result<Option<PathBuf>> {
    let mut p = Prompter { input, output };

    p.say("")?;
    p.say("resume-ats configuration")?;
    p.say("========================")?;
    p.say("")?;

    // 1. Scoring policy
    let configure_scoring = p.prompt_yes_no("Configure suggestions? (n accepts defaults)", false)?;
    let scoring = if configure_scoring {
        p.say("Every failing rule produces a suggestion; only the first few are shown.")?;
        let max_suggestions = p.prompt_until(
            "How many suggestions to show",
            &DEFAULT_MAX_SUGGESTIONS.to_string(),
            parse_max_suggestions,
        )?;
        p.say("")?;
        p.say("'rule-order' lists suggestions in the fixed rule order.")?;
        p.say("'severity' lists the suggestions worth the most points first.")?;
        let suggestion_order =
            p.prompt_until("Suggestion order", "rule-order", parse_suggestion_order)?;
        ScoringConfig {
            max_suggestions: Some(max_suggestions),
            suggestion_order: Some(suggestion_order),
        }
    } else {
        ScoringConfig::default()
    };

    // 2. Watch view
    p.say("")?;
    let theme = p.prompt_until("Theme for the watch view (auto/dark/light)", "auto", parse_theme)?;
    let refresh_interval =
        p.prompt_until("How often watch checks for edits", "1s", parse_refresh_interval)?;

    // 3. Document location
    p.say("")?;
    let document = p.prompt_with_default(
        "Resume document to score (blank line keeps the default location)",
        "default",
    )?;
    let document = if document == "default" {
        None
    } else {
        Some(PathBuf::from(document))
    };

    // 4. Config path
    p.say("")?;
    let path_str = p.prompt_with_default(
        "Where should the config be saved?",
        &default_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = p.prompt_yes_no(
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            p.say("Aborted.")?;
            return Ok(None);
        }
    }

    // 5. Write config
    let config = Config {
        document,
        scoring: Some(scoring),
        theme: Some(theme),
        refresh_interval: Some(refresh_interval),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    p.say("")?;
    p.say(&format!("Config written to {}", config_path.display()))?;
    p.say("Run `resume-ats sample` to try it on an example resume.")?;

    Ok(Some(config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::io::Cursor;

    #[test]
    fn test_parse_max_suggestions() {
        assert_eq!(parse_max_suggestions("3"), Ok(3));
        assert_eq!(parse_max_suggestions("8"), Ok(8));
        assert!(parse_max_suggestions("0").is_err());
        assert!(parse_max_suggestions("9").is_err());
        assert!(parse_max_suggestions("three").is_err());
    }

    #[test]
    fn test_parse_suggestion_order() {
        assert_eq!(parse_suggestion_order("severity"), Ok(SuggestionOrder::Severity));
        assert_eq!(parse_suggestion_order("Rule-Order"), Ok(SuggestionOrder::RuleOrder));
        assert!(parse_suggestion_order("random").is_err());
    }

    #[test]
    fn test_parse_theme_and_interval() {
        assert_eq!(parse_theme("LIGHT"), Ok(ThemeSetting::Light));
        assert!(parse_theme("solarized").is_err());
        assert_eq!(parse_refresh_interval("500ms"), Ok("500ms".to_string()));
        assert!(parse_refresh_interval("10ms").is_err());
        assert!(parse_refresh_interval("often").is_err());
    }

    #[test]
    fn test_wizard_accepts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("config.yaml");
        // scoring, theme, interval, document, path
        let input = Cursor::new("\n\n\n\n\n");
        let mut output = Vec::new();

        let written = run_init_wizard_with(input, &mut output, &target).unwrap();
        assert_eq!(written, Some(target.clone()));

        let config = load_config(Some(target)).unwrap();
        assert_eq!(config.effective_scoring(), ScoringConfig::default());
        assert_eq!(config.theme(), ThemeSetting::Auto);
        assert!(config.document.is_none());
        assert!(crate::config::validate_config(&config).is_ok());
    }

    #[test]
    fn test_wizard_retries_invalid_answers() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("config.yaml");
        let answers = [
            "y",            // configure suggestions
            "0",            // invalid count
            "5",            // count
            "loudest",      // invalid order
            "severity",     // order
            "dark",         // theme
            "2s",           // interval
            "/tmp/cv.json", // document
            "",             // path default
        ];
        let input = Cursor::new(answers.join("\n") + "\n");
        let mut output = Vec::new();

        run_init_wizard_with(input, &mut output, &target).unwrap();

        let config = load_config(Some(target)).unwrap();
        let scoring = config.effective_scoring();
        assert_eq!(scoring.max_suggestions(), 5);
        assert_eq!(scoring.suggestion_order(), SuggestionOrder::Severity);
        assert_eq!(config.theme(), ThemeSetting::Dark);
        assert_eq!(config.refresh_interval(), Duration::from_secs(2));
        assert_eq!(config.document, Some(PathBuf::from("/tmp/cv.json")));

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid:").count(), 2);
    }

    #[test]
    fn test_wizard_keeps_existing_config_unless_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("config.yaml");
        std::fs::write(&target, "theme: light\n").unwrap();

        let input = Cursor::new("\n\n\n\n\nn\n");
        let written = run_init_wizard_with(input, Vec::new(), &target).unwrap();

        assert!(written.is_none());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "theme: light\n");
    }

    #[test]
    fn test_wizard_fails_on_closed_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_init_wizard_with(Cursor::new(""), Vec::new(), &dir.path().join("c.yaml"));
        assert!(result.is_err());
    }
}
