// Copyright 2025 the Rampart Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides translation from the concrete windowing backend (`winit`) to
//! the engine's backend-agnostic raw events.
//!
//! This module decouples the rest of the engine from the specific event
//! format of the `winit` crate. Engine-level semantics (cursor caching,
//! wheel scaling, dropping extra buttons) live in the window adapter, not
//! here; this layer only reshapes events.

use rampart_core::platform::native::{MouseButton, NativeEvent};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::platform::scancode::PhysicalKeyExtScancode;

/// Translates a `winit::event::WindowEvent` into a [`NativeEvent`].
///
/// Key events use the platform scancode as the integer key code; keys the
/// platform cannot express as a scancode are dropped. Events with no input
/// or lifecycle meaning (focus changes, redraw requests, ...) return
/// `None`.
pub fn translate_window_event(event: &WindowEvent) -> Option<NativeEvent> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let code = key_event.physical_key.to_scancode()? as i32;
            match key_event.state {
                ElementState::Pressed => Some(NativeEvent::KeyDown { code }),
                ElementState::Released => Some(NativeEvent::KeyUp { code }),
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(NativeEvent::MouseMove {
            x: position.x as i32,
            y: position.y as i32,
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            Some(match state {
                ElementState::Pressed => NativeEvent::MouseButtonDown { button },
                ElementState::Released => NativeEvent::MouseButtonUp { button },
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
            };
            Some(NativeEvent::MouseWheel { delta })
        }
        WindowEvent::Resized(_) => Some(NativeEvent::Resized),
        WindowEvent::CloseRequested => Some(NativeEvent::CloseRequested),
        _ => None,
    }
}

/// (Internal) Maps a `winit::event::MouseButton` to the seam's
/// [`MouseButton`].
fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::TouchPhase;

    #[test]
    fn maps_standard_mouse_buttons() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(
            map_mouse_button(WinitMouseButton::Right),
            MouseButton::Right
        );
        assert_eq!(
            map_mouse_button(WinitMouseButton::Middle),
            MouseButton::Middle
        );
        assert_eq!(map_mouse_button(WinitMouseButton::Back), MouseButton::Back);
        assert_eq!(
            map_mouse_button(WinitMouseButton::Forward),
            MouseButton::Forward
        );
        assert_eq!(
            map_mouse_button(WinitMouseButton::Other(9)),
            MouseButton::Other(9)
        );
    }

    #[test]
    fn translates_mouse_button_press_and_release() {
        let pressed = WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        assert_eq!(
            translate_window_event(&pressed),
            Some(NativeEvent::MouseButtonDown {
                button: MouseButton::Left
            })
        );

        let released = WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Released,
            button: WinitMouseButton::Right,
        };
        assert_eq!(
            translate_window_event(&released),
            Some(NativeEvent::MouseButtonUp {
                button: MouseButton::Right
            })
        );
    }

    #[test]
    fn translates_cursor_motion_truncating_to_pixels() {
        let event = WindowEvent::CursorMoved {
            device_id: winit::event::DeviceId::dummy(),
            position: PhysicalPosition::new(100.7, 50.2),
        };
        assert_eq!(
            translate_window_event(&event),
            Some(NativeEvent::MouseMove { x: 100, y: 50 })
        );
    }

    #[test]
    fn translates_wheel_line_delta_using_vertical_axis() {
        let event = WindowEvent::MouseWheel {
            device_id: winit::event::DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(-1.0, 2.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            translate_window_event(&event),
            Some(NativeEvent::MouseWheel { delta: 2.0 })
        );
    }

    #[test]
    fn translates_wheel_pixel_delta_using_vertical_axis() {
        let event = WindowEvent::MouseWheel {
            device_id: winit::event::DeviceId::dummy(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(5.5, -10.0)),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            translate_window_event(&event),
            Some(NativeEvent::MouseWheel { delta: -10.0 })
        );
    }

    #[test]
    fn translates_lifecycle_events() {
        assert_eq!(
            translate_window_event(&WindowEvent::Resized(PhysicalSize::new(800, 600))),
            Some(NativeEvent::Resized)
        );
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(NativeEvent::CloseRequested)
        );
    }

    #[test]
    fn ignores_non_input_events() {
        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(translate_window_event(&WindowEvent::RedrawRequested), None);
    }
}
