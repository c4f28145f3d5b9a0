use crate::domain::ports::Alert;

/// CLI 下的提示：直接寫到 stderr，之後由 main 以非零狀態結束
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlert;

impl Alert for ConsoleAlert {
    fn alert(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
