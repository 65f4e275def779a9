/// 下载开始通知：每次真正发起网络请求前调用一次，命中本地缓存时不会调用。
///
/// 闭包 `Fn(&str)` 也实现了本 trait，可直接传入。
pub trait ProgressNotifier: Send + Sync {
    /// `name` 为文件名；内存下载时为 URL。
    fn on_start(&self, name: &str);
}
