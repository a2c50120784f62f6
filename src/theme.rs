/// Stylesheet injected once at the root of the app.
pub const CHAT_CSS: &str = r#"
:root {
    --color-bg-primary: #f9fafb;
    --color-bg-surface: #ffffff;
    --color-border: #e5e7eb;
    --color-text-primary: #1f2937;
    --color-text-muted: #6b7280;
    --color-accent: #3b82f6;
    --color-accent-soft: #dbeafe;
    --color-user-avatar: #dcfce7;
    --color-disabled: #f3f4f6;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    color: var(--color-text-primary);
    background: var(--color-bg-primary);
}

.app-shell { display: flex; flex-direction: column; height: 100vh; }

.header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    background: var(--color-bg-surface);
    border-bottom: 1px solid var(--color-border);
}

.header h1 { margin: 0; font-size: 1.25rem; font-weight: 600; }

.btn {
    padding: 0.375rem 0.75rem;
    border: none;
    border-radius: 0.375rem;
    background: var(--color-disabled);
    cursor: pointer;
}

.btn-primary { background: var(--color-accent); color: #ffffff; }
.btn:disabled { opacity: 0.6; cursor: default; }

.config-panel {
    padding: 1rem;
    background: var(--color-bg-surface);
    border-bottom: 1px solid var(--color-border);
}

.config-panel h2 { margin: 0 0 1rem; font-size: 1.1rem; }
.config-field { margin-bottom: 1rem; }
.config-field label { display: block; font-size: 0.875rem; margin-bottom: 0.25rem; }

.config-field input,
.config-field select,
.composer input {
    width: 100%;
    padding: 0.5rem 1rem;
    border: 1px solid var(--color-border);
    border-radius: 0.5rem;
}

.config-field input:disabled,
.composer input:disabled { background: var(--color-disabled); }

.config-error { color: #b91c1c; font-size: 0.875rem; }

.chat-list { flex: 1; overflow-y: auto; padding: 1rem; }

.empty-state { text-align: center; color: var(--color-text-muted); margin-top: 5rem; }
.empty-state .icon { display: block; font-size: 2.25rem; margin-bottom: 0.5rem; }

.message-row { display: flex; margin-bottom: 1rem; }
.message-row.user { justify-content: flex-end; }
.message-row.assistant { justify-content: flex-start; }

.avatar {
    width: 2rem;
    height: 2rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    margin: 0 0.5rem;
}

.avatar.assistant { background: var(--color-accent-soft); }
.avatar.user { background: var(--color-user-avatar); }

.bubble { max-width: 32rem; padding: 0.5rem 1rem; border-radius: 0.5rem; }
.bubble.user { background: var(--color-accent); color: #ffffff; }
.bubble.assistant { background: var(--color-bg-surface); border: 1px solid var(--color-border); }
.bubble p { margin: 0; font-size: 0.875rem; white-space: pre-wrap; }
.bubble .message-timestamp { margin-top: 0.25rem; font-size: 0.75rem; opacity: 0.75; }

.typing { display: flex; align-items: center; gap: 0.25rem; font-size: 0.875rem; color: var(--color-text-muted); }
.typing .dot { width: 0.25rem; height: 0.25rem; border-radius: 9999px; background: #9ca3af; animation: bounce 1s infinite; }
.typing .dot:nth-child(3) { animation-delay: 0.1s; }
.typing .dot:nth-child(4) { animation-delay: 0.2s; }

@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-0.25rem); } }

.composer {
    display: flex;
    gap: 0.5rem;
    padding: 1rem;
    background: var(--color-bg-surface);
    border-top: 1px solid var(--color-border);
}
"#;
