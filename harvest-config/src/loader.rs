//! Applies seed, environment and flag sources to registered fields.

use std::ffi::OsString;
use std::fmt::{self, Debug, Display, Formatter};

use clap::{Arg, ArgAction, ArgMatches, Command};
use harvest_sync::REDACTION_MARKER;
use tracing::debug;

use crate::{ConfigError, ConfigResult, Environment, Field, ProcessEnv};

/// Source that supplied a field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Literal default declared with the field.
    Seed,
    /// Environment variable.
    Env,
    /// Command-line flag.
    Flag,
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Seed => "seed",
            Self::Env => "env",
            Self::Flag => "flag",
        })
    }
}

/// A named field together with the sources it may be loaded from.
pub struct FieldSpec<'a> {
    name: String,
    field: &'a dyn Field,
    seed: Option<String>,
    env: Option<String>,
    flag: Option<String>,
}

impl<'a> FieldSpec<'a> {
    /// Creates a spec for `field` with no sources.
    #[must_use]
    pub fn new(name: impl Into<String>, field: &'a dyn Field) -> Self {
        Self {
            name: name.into(),
            field,
            seed: None,
            env: None,
            flag: None,
        }
    }

    /// Sets the literal applied first.
    #[must_use]
    pub fn seed(mut self, literal: impl Into<String>) -> Self {
        self.seed = Some(literal.into());
        self
    }

    /// Sets the environment variable that overrides the seed.
    #[must_use]
    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env = Some(var.into());
        self
    }

    /// Sets the long flag name (without dashes) that overrides seed and env.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.flag = Some(name.into());
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Debug for FieldSpec<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let seed = self.seed.as_deref().map(|seed| {
            if self.field.redacted() {
                REDACTION_MARKER
            } else {
                seed
            }
        });
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.field.kind())
            .field("seed", &seed)
            .field("env", &self.env)
            .field("flag", &self.flag)
            .finish()
    }
}

/// Loads registered fields from their sources.
///
/// Sources apply in the order seed, env, flag; each one present overwrites the
/// previous through [`Field::set_string`], so a listener on the field sees every
/// applied value. A field with no source present keeps its current value.
pub struct Loader<'a> {
    fields: Vec<FieldSpec<'a>>,
    env: Box<dyn Environment>,
    args: Vec<OsString>,
}

impl Default for Loader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Loader<'a> {
    /// Creates a loader reading the process environment and no flags.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            env: Box::new(ProcessEnv),
            args: Vec::new(),
        }
    }

    /// Replaces the environment lookup.
    #[must_use]
    pub fn with_environment(mut self, env: impl Environment + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Sets the command-line arguments parsed for flags, without the program name.
    ///
    /// Every argument must be a registered `--flag`; anything else fails the load.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Registers a field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateField`] when the name is already taken,
    /// [`ConfigError::InvalidFlag`] when the flag name is empty, starts with a
    /// dash or contains `=` or whitespace, and [`ConfigError::DuplicateFlag`]
    /// when another field already claims the flag.
    pub fn register(&mut self, spec: FieldSpec<'a>) -> ConfigResult<()> {
        if self.fields.iter().any(|existing| existing.name == spec.name) {
            return Err(ConfigError::DuplicateField { field: spec.name });
        }
        if let Some(flag) = spec.flag.as_deref() {
            if flag.is_empty()
                || flag.starts_with('-')
                || flag.contains(|c: char| c == '=' || c.is_whitespace())
            {
                return Err(ConfigError::InvalidFlag {
                    flag: flag.to_owned(),
                });
            }
            if self.fields.iter().any(|existing| existing.flag.as_deref() == Some(flag)) {
                return Err(ConfigError::DuplicateFlag {
                    flag: flag.to_owned(),
                    field: spec.name,
                });
            }
        }
        self.fields.push(spec);
        Ok(())
    }

    /// Returns the registered specs in registration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec<'a>] {
        &self.fields
    }

    /// Applies every source of every field, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Flags`] before touching any field when the
    /// arguments contain an unknown flag, a stray positional argument or a
    /// flag missing its value. Otherwise stops at the first rejected text with
    /// [`ConfigError::Parse`]; fields processed before the failure keep their
    /// new values.
    pub fn load(&self) -> ConfigResult<()> {
        let matches = self
            .flag_command()
            .try_get_matches_from(&self.args)
            .map_err(|source| ConfigError::Flags { source })?;

        for spec in &self.fields {
            self.apply(spec, &matches)?;
        }
        Ok(())
    }

    /// Builds the flag parser from the registered specs.
    fn flag_command(&self) -> Command {
        let command = Command::new("harvest-config")
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true);

        self.fields
            .iter()
            .filter_map(|spec| spec.flag.as_deref().map(|flag| (flag, spec.field.is_switch())))
            .fold(command, |command, (flag, is_switch)| command.arg(flag_arg(flag, is_switch)))
    }

    fn apply(&self, spec: &FieldSpec<'a>, matches: &ArgMatches) -> ConfigResult<()> {
        if let Some(seed) = &spec.seed {
            assign(spec, Origin::Seed, seed)?;
        }

        if let Some(text) = spec.env.as_deref().and_then(|var| self.env.var(var)) {
            assign(spec, Origin::Env, &text)?;
        }

        if let Some(text) = spec
            .flag
            .as_deref()
            .and_then(|flag| matches.try_get_one::<String>(flag).ok().flatten())
        {
            assign(spec, Origin::Flag, text)?;
        }

        Ok(())
    }
}

fn assign(spec: &FieldSpec<'_>, origin: Origin, text: &str) -> ConfigResult<()> {
    spec.field
        .set_string(text)
        .map_err(|source| ConfigError::Parse {
            field: spec.name.clone(),
            origin,
            source,
        })?;
    debug!(
        field = %spec.name,
        kind = spec.field.kind(),
        %origin,
        value = %spec.field.render(),
        "configuration value applied"
    );
    Ok(())
}

/// `--flag=value` or `--flag value`; a later occurrence overrides an earlier one.
///
/// Switch flags take their value only in the `--flag=value` form, and a bare
/// `--flag` means `true`. Other flags accept values starting with a dash.
fn flag_arg(flag: &str, is_switch: bool) -> Arg {
    let arg = Arg::new(flag.to_owned())
        .long(flag.to_owned())
        .action(ArgAction::Set);
    if is_switch {
        arg.num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
    } else {
        arg.num_args(1).allow_hyphen_values(true)
    }
}
