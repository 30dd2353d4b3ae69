use yew::prelude::*;
use web_sys::Element;

use crate::config::LandingConfig;
use crate::dom::AnimationFrameLoop;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Offset grows toward the end of the strip, then jumps back to zero.
    Forward,
    /// Offset shrinks toward zero, then jumps to the end of the strip.
    Backward,
}

impl Direction {
    fn start(self, max: f64) -> f64 {
        match self {
            Direction::Forward => 0.0,
            Direction::Backward => max,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrackState {
    Fresh,
    Running,
    Paused,
}

/// Sub-pixel scroll position of one auto-scrolling strip.
///
/// `scrollLeft` only takes whole pixels, so the precise offset lives here and
/// the element gets the rounded value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselTrack {
    direction: Direction,
    offset: f64,
    state: TrackState,
}

impl CarouselTrack {
    pub fn new(direction: Direction) -> Self {
        Self { direction, offset: 0.0, state: TrackState::Fresh }
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advance one frame. Returns the offset to write to the element, or
    /// `None` while paused.
    ///
    /// `dom_offset` is where the element currently sits. The track adopts it
    /// when resuming, and while running whenever it is more than a pixel away
    /// from the last written value, so wheel or keyboard scrolling is kept.
    pub fn tick(&mut self, dom_offset: f64, max: f64, animating: bool, step: f64) -> Option<f64> {
        if !animating {
            if self.state == TrackState::Running {
                self.state = TrackState::Paused;
            }
            return None;
        }

        match self.state {
            TrackState::Fresh => self.offset = self.direction.start(max),
            TrackState::Paused => self.offset = dom_offset,
            TrackState::Running if (dom_offset - self.offset.round()).abs() > 1.0 => self.offset = dom_offset,
            TrackState::Running => {}
        }
        self.state = TrackState::Running;

        self.offset = match self.direction {
            Direction::Forward if self.offset >= max => 0.0,
            Direction::Forward => self.offset + step,
            Direction::Backward if self.offset <= 0.0 => max,
            Direction::Backward => self.offset - step,
        };
        Some(self.offset)
    }
}

/// Scroll position while dragging with the mouse, clamped to the strip.
pub fn drag_offset(origin_offset: f64, origin_x: f64, pointer_x: f64, max: f64) -> f64 {
    (origin_offset - (pointer_x - origin_x)).clamp(0.0, max.max(0.0))
}

fn max_offset(el: &Element) -> f64 {
    f64::from((el.scroll_width() - el.client_width()).max(0))
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub title: AttrValue,
    pub caption: AttrValue,
    pub items: &'static [&'static str],
    pub direction: Direction,
    #[prop_or_default]
    pub card_class: Classes,
    pub animating: bool,
    pub on_press: Callback<()>,
    pub on_release: Callback<()>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let track_ref = use_node_ref();
    let animating = use_mut_ref(|| props.animating);
    let drag_origin = use_mut_ref(|| None::<(f64, f64)>);

    // The frame loop reads the flag on every tick; keep it current.
    {
        let animating = animating.clone();
        use_effect_with_deps(
            move |flag| {
                *animating.borrow_mut() = *flag;
                || ()
            },
            props.animating,
        );
    }

    // One frame loop per strip for as long as the strip is mounted.
    {
        let track_ref = track_ref.clone();
        let animating = animating.clone();
        let direction = props.direction;
        let step = config.carousel_step;
        use_effect_with_deps(
            move |_| {
                let mut track = CarouselTrack::new(direction);
                let frame_loop = AnimationFrameLoop::start(move || {
                    if let Some(el) = track_ref.cast::<Element>() {
                        let dom_offset = f64::from(el.scroll_left());
                        if let Some(offset) = track.tick(dom_offset, max_offset(&el), *animating.borrow(), step) {
                            el.set_scroll_left(offset.round() as i32);
                        }
                    }
                });
                move || drop(frame_loop)
            },
            (),
        );
    }

    let onmousedown = {
        let track_ref = track_ref.clone();
        let drag_origin = drag_origin.clone();
        let on_press = props.on_press.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = track_ref.cast::<Element>() {
                *drag_origin.borrow_mut() = Some((f64::from(el.scroll_left()), f64::from(e.client_x())));
            }
            on_press.emit(());
        })
    };

    let onmousemove = {
        let track_ref = track_ref.clone();
        let drag_origin = drag_origin.clone();
        Callback::from(move |e: MouseEvent| {
            let origin = *drag_origin.borrow();
            if let (Some((origin_offset, origin_x)), Some(el)) = (origin, track_ref.cast::<Element>()) {
                e.prevent_default();
                let offset = drag_offset(origin_offset, origin_x, f64::from(e.client_x()), max_offset(&el));
                el.set_scroll_left(offset.round() as i32);
            }
        })
    };

    let release = {
        let drag_origin = drag_origin.clone();
        let on_release = props.on_release.clone();
        move || {
            drag_origin.borrow_mut().take();
            on_release.emit(());
        }
    };
    let onmouseup = {
        let release = release.clone();
        Callback::from(move |_: MouseEvent| release())
    };
    let onmouseleave = {
        let release = release.clone();
        Callback::from(move |_: MouseEvent| release())
    };
    let ontouchend = Callback::from(move |_: TouchEvent| release());
    let ontouchstart = {
        let on_press = props.on_press.clone();
        Callback::from(move |_: TouchEvent| on_press.emit(()))
    };

    html! {
        <div class="carousel">
            <h3 class="carousel-title">{ props.title.clone() }</h3>
            <div
                ref={track_ref}
                class={classes!("carousel-track", (!props.animating).then(|| "grabbing"))}
                {onmousedown}
                {onmousemove}
                {onmouseup}
                {onmouseleave}
                {ontouchstart}
                {ontouchend}
            >
                // Two copies back to back so the wrap-around is not visible.
                { for props.items.iter().chain(props.items.iter()).enumerate().map(|(index, title)| html! {
                    <div key={index} class={classes!("carousel-card", props.card_class.clone())}>
                        <h4>{ *title }</h4>
                        <p>{ props.caption.clone() }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick the way the frame loop does: the element holds the rounded value.
    fn tick_written(track: &mut CarouselTrack, dom: &mut f64, max: f64) -> f64 {
        let next = track.tick(*dom, max, true, 0.5).unwrap();
        *dom = next.round();
        next
    }

    #[test]
    fn test_forward_track_increases_while_animating() {
        let mut track = CarouselTrack::new(Direction::Forward);
        let mut dom = 0.0;
        let mut previous = track.offset();
        for _ in 0..20 {
            let next = tick_written(&mut track, &mut dom, 100.0);
            assert!(next > previous, "{} should exceed {}", next, previous);
            previous = next;
        }
        assert_eq!(previous, 10.0);
    }

    #[test]
    fn test_forward_track_wraps_to_zero() {
        let mut track = CarouselTrack::new(Direction::Forward);
        let mut dom = 0.0;
        let mut last = 0.0;
        for _ in 0..4 {
            last = tick_written(&mut track, &mut dom, 1.5);
        }
        assert_eq!(last, 0.0);
        assert_eq!(tick_written(&mut track, &mut dom, 1.5), 0.5);
    }

    #[test]
    fn test_backward_track_starts_at_max_and_wraps() {
        let mut track = CarouselTrack::new(Direction::Backward);
        let mut dom = 0.0;
        assert_eq!(tick_written(&mut track, &mut dom, 1.0), 0.5);
        assert_eq!(tick_written(&mut track, &mut dom, 1.0), 0.0);
        assert_eq!(tick_written(&mut track, &mut dom, 1.0), 1.0);
    }

    #[test]
    fn test_running_track_adopts_external_scroll() {
        let mut track = CarouselTrack::new(Direction::Forward);
        let mut dom = 0.0;
        tick_written(&mut track, &mut dom, 100.0);
        tick_written(&mut track, &mut dom, 100.0);

        // Wheel scroll moved the strip to 60 between frames.
        assert_eq!(track.tick(60.0, 100.0, true, 0.5), Some(60.5));

        // Sub-pixel rounding of our own write is not mistaken for a scroll.
        assert_eq!(track.tick(61.0, 100.0, true, 0.5), Some(61.0));
    }

    #[test]
    fn test_backward_running_track_adopts_external_scroll() {
        let mut track = CarouselTrack::new(Direction::Backward);
        let mut dom = 0.0;
        tick_written(&mut track, &mut dom, 100.0);
        assert_eq!(track.tick(20.0, 100.0, true, 0.5), Some(19.5));
    }

    #[test]
    fn test_track_frozen_while_paused() {
        let mut track = CarouselTrack::new(Direction::Forward);
        track.tick(0.0, 100.0, true, 0.5);
        track.tick(0.0, 100.0, true, 0.5);
        let frozen = track.offset();
        for _ in 0..10 {
            assert_eq!(track.tick(frozen, 100.0, false, 0.5), None);
            assert_eq!(track.offset(), frozen);
        }
    }

    #[test]
    fn test_resume_adopts_manual_position() {
        let mut track = CarouselTrack::new(Direction::Forward);
        track.tick(0.0, 100.0, true, 0.5);
        track.tick(0.0, 100.0, false, 0.5);
        // The user dragged the strip to 40 while it was paused.
        assert_eq!(track.tick(40.0, 100.0, true, 0.5), Some(40.5));
    }

    #[test]
    fn test_no_overflow_stays_put() {
        let mut forward = CarouselTrack::new(Direction::Forward);
        let mut backward = CarouselTrack::new(Direction::Backward);
        for _ in 0..3 {
            assert_eq!(forward.tick(0.0, 0.0, true, 0.5), Some(0.0));
            assert_eq!(backward.tick(0.0, 0.0, true, 0.5), Some(0.0));
        }
    }

    #[test]
    fn test_drag_offset_is_clamped() {
        assert_eq!(drag_offset(50.0, 200.0, 180.0, 100.0), 70.0);
        assert_eq!(drag_offset(50.0, 200.0, 400.0, 100.0), 0.0);
        assert_eq!(drag_offset(50.0, 200.0, 0.0, 100.0), 100.0);
        assert_eq!(drag_offset(0.0, 0.0, -10.0, -5.0), 0.0);
    }
}
