//! Application stylesheet, embedded so the shell works offline

pub const CUSTOM_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Segoe UI', system-ui, sans-serif;
    background: #0f172a;
    color: #e5e7eb;
}

.main-container {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.title-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 20px;
    background: #111827;
    border-bottom: 1px solid #1f2937;
}

.title-text {
    font-weight: 600;
    color: #22d3ee;
}

.tab-bar {
    display: flex;
    gap: 4px;
}

.tab-item {
    padding: 6px 14px;
    border-radius: 6px;
    color: #9ca3af;
    text-decoration: none;
}

.tab-item:hover {
    background: #1f2937;
}

.tab-active {
    background: #1e3a5f;
    color: #e5e7eb;
}

.content-area {
    flex: 1;
    padding: 24px;
}

.page h1 {
    margin-bottom: 12px;
}

.not-found {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 12px;
    min-height: 100vh;
}

.not-found code {
    color: #facc15;
}

.status {
    padding: 24px;
    color: #9ca3af;
}

.status-error {
    color: #f87171;
}
"#;
