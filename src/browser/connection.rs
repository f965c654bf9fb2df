use anyhow::{Context, Result};
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, info};

/// 连接到已登录的浏览器，并找到站点所在的标签页
///
/// 优先复用 url 以 `site_url` 开头的已打开标签页；没有则新开一个并导航过去。
pub async fn connect_to_session_page(port: u16, site_url: &str) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url)
        .await
        .with_context(|| format!("无法连接到浏览器调试端口 {}", port))?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let pages = browser.pages().await.context("无法获取浏览器标签页")?;
    debug!("获取到 {} 个标签页", pages.len());

    for page in pages.iter() {
        if let Ok(Some(url)) = page.url().await {
            if url.starts_with(site_url) {
                info!("✓ 复用已打开的标签页: {}", url);
                return Ok((browser, page.clone()));
            }
        }
    }

    debug!("没有打开的站点标签页，新建并导航到: {}", site_url);
    let page = browser
        .new_page(site_url)
        .await
        .with_context(|| format!("无法打开 {}", site_url))?;
    info!("已导航到: {}", site_url);

    Ok((browser, page))
}
