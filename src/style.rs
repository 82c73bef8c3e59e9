/// Base layout. Colours and fonts of option names and choices come from the
/// style document and are appended as a second stylesheet.
pub const APP_STYLE: &str = r#"
:root {
    color-scheme: light;
    font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background-color: #f4f6fb;
    color: #141a2b;
}

body {
    margin: 0;
}

.app {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

header {
    padding: 20px 32px 16px;
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    border-bottom: 1px solid rgba(20, 26, 43, 0.12);
}

header .branding {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

header .title {
    font-size: 26px;
    font-weight: 700;
    letter-spacing: 0.06em;
    text-transform: uppercase;
}

header .subtitle {
    font-size: 15px;
    color: rgba(20, 26, 43, 0.6);
}

main {
    display: flex;
    flex-direction: column;
    gap: 20px;
    padding: 24px 32px 48px;
}

.controls {
    display: flex;
    gap: 12px;
}

button {
    background: linear-gradient(120deg, #45c9ff, #2f70ff);
    border: none;
    border-radius: 999px;
    padding: 10px 18px;
    color: #05070f;
    font-weight: 600;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    cursor: pointer;
    transition: transform 160ms ease, box-shadow 160ms ease;
}

button.secondary {
    background: rgba(47, 112, 255, 0.08);
    color: #2f70ff;
    border: 1px solid rgba(47, 112, 255, 0.32);
}

button:hover {
    transform: translateY(-1px);
    box-shadow: 0 10px 20px rgba(69, 201, 255, 0.25);
}

.category {
    border: 2px solid rgba(20, 26, 43, 0.14);
    border-radius: 14px;
    padding: 16px 20px;
    background: #ffffff;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.category .start-button {
    align-self: flex-start;
}

h3 {
    margin: 0;
    font-size: 18px;
    letter-spacing: 0.04em;
}

.option-container {
    display: flex;
    flex-wrap: wrap;
    gap: 14px;
}

.option-column {
    display: flex;
    flex-direction: column;
    min-width: 120px;
}

.option-name {
    padding: 6px 10px;
    border: 1px solid transparent;
    text-align: center;
}

.option-choices {
    display: flex;
    flex-direction: column;
}

.option-choices div {
    padding: 6px 10px;
    min-height: 1.4em;
    text-align: center;
}

.option-column.spinning .option-choices {
    outline: 2px dashed rgba(47, 112, 255, 0.4);
}

.panel {
    border-radius: 14px;
    padding: 16px 20px;
    background: #ffffff;
}

.panel.error {
    border: 1px solid rgba(220, 60, 60, 0.6);
    color: #a11d1d;
}

.helper {
    color: rgba(20, 26, 43, 0.6);
}

.compact {
    padding: 20px 24px;
    gap: 12px;
}
"#;
