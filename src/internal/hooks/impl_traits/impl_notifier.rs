use crate::internal::hooks::traits::ProgressNotifier;

/// 默认通知：向标准输出打印 `{name} ... DOWNLOADING`。
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ProgressNotifier for ConsoleNotifier {
    fn on_start(&self, name: &str) {
        println!("{name} ... DOWNLOADING");
    }
}

/// 不做任何输出的通知。
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl ProgressNotifier for SilentNotifier {
    fn on_start(&self, _name: &str) {}
}

impl<F> ProgressNotifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_start(&self, name: &str) {
        self(name)
    }
}
