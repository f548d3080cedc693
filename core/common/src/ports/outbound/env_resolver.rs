//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリや API 設定を環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を読む（未設定・空文字は None）
    fn var(&self, name: &str) -> Option<String>;

    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. INTERVIEWER_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/interviewer（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/interviewer
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = self.var("INTERVIEWER_HOME") {
            return Ok(HomeDir::new(home));
        }
        let config_base = self
            .var("XDG_CONFIG_HOME")
            .map(std::path::PathBuf::from)
            .or_else(|| {
                self.var("HOME")
                    .map(|h| std::path::PathBuf::from(h).join(".config"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;
        Ok(HomeDir::new(config_base.join("interviewer")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvResolver for MapEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|s| s.to_string())
        }
    }

    #[test]
    fn test_resolve_home_dir_prefers_interviewer_home() {
        let env = MapEnv(HashMap::from([
            ("INTERVIEWER_HOME", "/opt/iv"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/u"),
        ]));
        assert_eq!(*env.resolve_home_dir().unwrap(), PathBuf::from("/opt/iv"));
    }

    #[test]
    fn test_resolve_home_dir_xdg_then_home() {
        let env = MapEnv(HashMap::from([("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/u")]));
        assert_eq!(*env.resolve_home_dir().unwrap(), PathBuf::from("/xdg/interviewer"));

        let env = MapEnv(HashMap::from([("HOME", "/home/u")]));
        assert_eq!(
            *env.resolve_home_dir().unwrap(),
            PathBuf::from("/home/u/.config/interviewer")
        );
    }

    #[test]
    fn test_resolve_home_dir_without_home_is_env_error() {
        let env = MapEnv(HashMap::new());
        let err = env.resolve_home_dir().unwrap_err();
        assert!(matches!(err, Error::Env(_)));
    }
}
