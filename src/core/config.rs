use std::{env, path::PathBuf, time::Duration};

use eyre::Result;
use once_cell::sync::OnceCell;
use twilight_model::id::{marker::UserMarker, Id};

use crate::{active::MenuConfig, util::constants::RED};

static CONFIG: OnceCell<BotConfig> = OnceCell::new();

#[derive(Debug)]
pub struct BotConfig {
    pub token: Box<str>,
    pub data_path: PathBuf,
    /// Users that may operate every menu.
    pub owners: Box<[Id<UserMarker>]>,
    pub prefix: Box<str>,
    pub embed_color: u32,
    pub menu_timeout: Duration,
    pub jump_timeout: Duration,
    pub notice_duration: Duration,
    /// Whether to delete a menu's message once it stops or only clear its reactions.
    pub delete_message_after: bool,
}

impl BotConfig {
    pub fn get() -> &'static Self {
        CONFIG
            .get()
            .expect("`BotConfig::init` must be called first")
    }

    pub fn init() -> Result<()> {
        let config = BotConfig {
            token: env_var("DISCORD_TOKEN")?,
            data_path: env_var("DATA_PATH")?,
            owners: env_var_or("OWNER_USER_IDS", UserIds::default)?.0,
            prefix: env_var_or("PREFIX", || Box::from("!"))?,
            embed_color: env_var_or("EMBED_COLOR", || Color(RED))?.0,
            menu_timeout: env_var_or("MENU_TIMEOUT_SECS", || Secs(180))?.into(),
            jump_timeout: env_var_or("JUMP_TIMEOUT_SECS", || Secs(10))?.into(),
            notice_duration: env_var_or("NOTICE_SECS", || Secs(5))?.into(),
            delete_message_after: env_var_or("DELETE_MESSAGE_AFTER", || true)?,
        };

        if CONFIG.set(config).is_err() {
            warn!("CONFIG was already set");
        }

        Ok(())
    }

    pub fn menu_config(&self) -> MenuConfig {
        MenuConfig {
            idle_timeout: self.menu_timeout,
            jump_timeout: self.jump_timeout,
            notice_duration: self.notice_duration,
        }
    }
}

#[derive(Debug, Default)]
struct UserIds(Box<[Id<UserMarker>]>);

#[derive(Debug)]
struct Color(u32);

#[derive(Debug)]
struct Secs(u64);

impl From<Secs> for Duration {
    fn from(secs: Secs) -> Self {
        Duration::from_secs(secs.0)
    }
}

trait EnvKind: Sized {
    const EXPECTED: &'static str;

    fn from_str(s: String) -> Result<Self, String>;
}

macro_rules! env_kind {
    ($($ty:ty: |$arg:ident| $impl:block,)*) => {
        $(
            impl EnvKind for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_str($arg: String) -> Result<Self, String> {
                    $impl
                }
            }
        )*
    };
}

env_kind! {
    Box<str>: |s| { Ok(s.into_boxed_str()) },
    bool: |s| { s.parse().map_err(|_| s) },
    PathBuf: |s| { s.parse().map_err(|_| s) },
}

impl EnvKind for Secs {
    const EXPECTED: &'static str = "a number of seconds";

    fn from_str(s: String) -> Result<Self, String> {
        s.parse().map(Self).map_err(|_| s)
    }
}

impl EnvKind for Color {
    const EXPECTED: &'static str = "a hex color like `0xE74C3C` or `#E74C3C`";

    fn from_str(s: String) -> Result<Self, String> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix('#'))
            .unwrap_or(&s);

        match u32::from_str_radix(hex, 16) {
            Ok(color) if color <= 0xFF_FF_FF => Ok(Self(color)),
            _ => Err(s),
        }
    }
}

impl EnvKind for UserIds {
    const EXPECTED: &'static str = "a comma-separated list of user ids";

    fn from_str(s: String) -> Result<Self, String> {
        s.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| id.parse().ok().and_then(Id::new_checked))
            .collect::<Option<_>>()
            .map(Self)
            .ok_or(s)
    }
}

fn env_var<T: EnvKind>(name: &str) -> Result<T> {
    let value = env::var(name).map_err(|_| eyre!("missing env variable `{name}`"))?;

    parse_var(name, value)
}

fn env_var_or<T: EnvKind>(name: &str, default: impl FnOnce() -> T) -> Result<T> {
    match env::var(name) {
        Ok(value) => parse_var(name, value),
        Err(_) => Ok(default()),
    }
}

fn parse_var<T: EnvKind>(name: &str, value: String) -> Result<T> {
    T::from_str(value).map_err(|value| {
        eyre!(
            "failed to parse env variable `{name}={value}`; expected {expected}",
            expected = T::EXPECTED
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(Color::from_str("0x3498DB".to_owned()).unwrap().0, 0x3498DB);
        assert_eq!(Color::from_str("#ffffff".to_owned()).unwrap().0, 0xFFFFFF);
        assert!(Color::from_str("0x1000000".to_owned()).is_err());
        assert!(Color::from_str("red".to_owned()).is_err());
    }

    #[test]
    fn test_parse_user_ids() {
        let ids = UserIds::from_str("1, 22,".to_owned()).unwrap();
        assert_eq!(&*ids.0, [Id::new(1), Id::new(22)]);

        assert!(UserIds::from_str("1,abc".to_owned()).is_err());
        assert!(UserIds::from_str("0".to_owned()).is_err());
    }

    #[test]
    fn test_parse_error_names_variable() {
        let err = parse_var::<Secs>("NOTICE_SECS", "soon".to_owned()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to parse env variable `NOTICE_SECS=soon`; expected a number of seconds"
        );
    }
}
