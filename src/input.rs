//! Converts raw egui pointer input over the canvas into the three
//! events the editor cares about.

use egui::{Context, PointerButton, Pos2, Rect};

/// A pointer event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed.
    PrimaryDown { pos: Pos2 },
    /// Secondary button pressed.
    SecondaryDown { pos: Pos2 },
    /// Pointer moved while a button is held (one event per position
    /// change, carrying the held button).
    PointerDrag { pos: Pos2, button: PointerButton },
}

impl CanvasEvent {
    pub fn pos(&self) -> Pos2 {
        match *self {
            CanvasEvent::PrimaryDown { pos }
            | CanvasEvent::SecondaryDown { pos }
            | CanvasEvent::PointerDrag { pos, .. } => pos,
        }
    }
}

/// Collects pointer events over the canvas rectangle each frame.
pub struct InputCollector {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle for this frame's layout.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and return this frame's canvas events.
    pub fn collect(&mut self, ctx: &Context) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = hover {
                        if self.canvas_rect.contains(pos) {
                            let pos = self.to_canvas(pos);
                            events.push(match button {
                                PointerButton::Primary => CanvasEvent::PrimaryDown { pos },
                                _ => CanvasEvent::SecondaryDown { pos },
                            });
                        }
                    }
                }
            }

            // move-while-held: one drag event per position change
            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos && self.canvas_rect.contains(pos) {
                    for button in [PointerButton::Primary, PointerButton::Secondary] {
                        if input.pointer.button_down(button) && !input.pointer.button_pressed(button)
                        {
                            events.push(CanvasEvent::PointerDrag {
                                pos: self.to_canvas(pos),
                                button,
                            });
                        }
                    }
                }
                self.last_pointer_pos = Some(pos);
            } else {
                self.last_pointer_pos = None;
            }
        });

        events
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
