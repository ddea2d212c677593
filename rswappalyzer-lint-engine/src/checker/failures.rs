use crate::error::{LintError, LintResult};

/// 校验模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// 遇到第一个错误立即终止
    #[default]
    FailFast,
    /// 收集全部错误后统一上报
    FailSlow,
}

/// 错误收集器
/// FailFast 下 record 直接透传错误，由 `?` 短路；FailSlow 下吞掉错误并暂存
#[derive(Debug, Default)]
pub struct Failures {
    mode: CheckMode,
    collected: Vec<LintError>,
}

impl Failures {
    pub fn new(mode: CheckMode) -> Self {
        Self {
            mode,
            collected: Vec::new(),
        }
    }

    /// 记录单项检查结果
    pub fn record<T>(&mut self, result: LintResult<T>) -> LintResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => match self.mode {
                CheckMode::FailFast => Err(err),
                CheckMode::FailSlow => {
                    log::trace!("Recorded failure: {}", err);
                    self.collected.push(err);
                    Ok(None)
                }
            },
        }
    }

    pub fn len(&self) -> usize {
        self.collected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    pub fn into_inner(self) -> Vec<LintError> {
        self.collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_fast_propagates() {
        let mut failures = Failures::new(CheckMode::FailFast);
        let result = failures.record::<()>(Err(LintError::RuleParse("boom".into())));
        assert!(result.is_err());
        assert!(failures.is_empty());
    }

    #[test]
    fn test_fail_slow_collects() {
        let mut failures = Failures::new(CheckMode::FailSlow);
        assert_eq!(failures.record(Ok(3)).unwrap(), Some(3));
        assert_eq!(failures.record::<u8>(Err(LintError::RuleParse("a".into()))).unwrap(), None);
        assert_eq!(failures.record::<u8>(Err(LintError::RuleParse("b".into()))).unwrap(), None);
        assert_eq!(failures.len(), 2);
        assert_eq!(
            failures.into_inner(),
            vec![LintError::RuleParse("a".into()), LintError::RuleParse("b".into())]
        );
    }
}
