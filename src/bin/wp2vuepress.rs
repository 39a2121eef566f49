use std::process::ExitCode;

// 使用 mimalloc 作为全局内存分配器
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    match wp2vuepress::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "migration failed");
            ExitCode::FAILURE
        }
    }
}
