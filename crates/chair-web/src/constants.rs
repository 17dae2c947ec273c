// DOM hooks and presentation constants for the web frontend

pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_ID: &str = "configurator";
pub const IDLE_INDICATOR_ID: &str = "idle-indicator";

pub const IDLE_INDICATOR_TEXT: &str = "Auto-rotating views \u{2022} Move mouse to stop";
pub const TITLE_HINT: &str = "Drag to rotate \u{2022} Scroll to zoom";

// Background behind the chair, linear space (#f5f5f5)
pub const CLEAR_COLOR: [f64; 3] = [0.913, 0.913, 0.913];
// Floor tint, linear space
pub const FLOOR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

pub const PANEL_CSS: &str = r#"
#configurator { position: absolute; inset: 0; pointer-events: none; font-family: system-ui, sans-serif; }
#configurator .card { pointer-events: auto; background: rgba(255,255,255,0.9); border: 1px solid #e4e4e7;
  border-radius: 16px; padding: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.08); }
#configurator .heading { font-size: 9px; letter-spacing: 0.2em; text-transform: uppercase; color: #a1a1aa; margin-bottom: 8px; }
#configurator .presets { position: fixed; left: 24px; top: 50%; transform: translateY(-50%); display: flex; flex-direction: column; gap: 8px; }
#configurator .controls { position: fixed; left: 50%; bottom: 24px; transform: translateX(-50%); display: flex; gap: 12px; }
#configurator .title { position: fixed; top: 24px; left: 24px; color: #27272a; }
#configurator .row { display: flex; gap: 6px; flex-wrap: wrap; }
#configurator button { border: none; cursor: pointer; border-radius: 8px; padding: 4px 10px; font-size: 9px;
  text-transform: uppercase; background: #f4f4f5; color: #71717a; }
#configurator button.active { background: #18181b; color: #fff; }
#configurator button.swatch { width: 28px; height: 28px; border-radius: 50%; padding: 0; opacity: 0.8; }
#configurator button.swatch.active { opacity: 1; outline: 2px solid #18181b; outline-offset: 2px; }
#configurator button.preset { width: 48px; height: 48px; padding: 0; display: flex; flex-direction: column; overflow: hidden; opacity: 0.8; }
#configurator button.preset.active { opacity: 1; outline: 2px solid #18181b; outline-offset: 2px; }
#configurator button.preset:disabled { cursor: wait; }
#configurator .preset-band { width: 100%; }
#configurator .dot { width: 16px; height: 16px; border-radius: 50%; border: 2px solid #e4e4e7; opacity: 0.4; }
#configurator .dot.active { border-color: #18181b; opacity: 1; }
#idle-indicator { position: fixed; bottom: 16px; left: 50%; transform: translateX(-50%); background: rgba(0,0,0,0.6);
  color: #fff; font-size: 12px; padding: 6px 12px; border-radius: 999px; }
"#;
