//! One page per component family. Each page keeps its own demo state in local signals.

use chrono::NaiveDate;
use leptos::*;
use serde_json::json;
use widgetui::prelude::*;
use widgetui::{Action, Form, Transition};

const RELEASE_NOTES: &str = "\
### Release notes

Buttons pulse through a **loading** sequence, pickers close on *outside clicks*, and \
`Form` submissions arrive as a single action.

- Markdown escapes raw <b>html</b>
- Links stay on [safe schemes](https://example.com)
";

fn size_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("sm", "Small"),
        SelectOption::new("md", "Medium"),
        SelectOption::new("lg", "Large"),
        SelectOption::new("xl", "Extra large").disabled(),
    ]
}

fn contact_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("email", "Email"),
        SelectOption::new("phone", "Phone"),
        SelectOption::new("none", "Do not contact"),
    ]
}

fn traffic() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Mon", 12.0),
        ChartDatum::new("Tue", 18.0),
        ChartDatum::new("Wed", 9.0),
        ChartDatum::new("Thu", 24.0),
        ChartDatum::new("Fri", 15.0).with_color("#ff5f40"),
    ]
}

#[component]
fn SectionHeading(#[prop(into)] title: String, #[prop(into)] blurb: String) -> impl IntoView {
    view! {
        <Col gap=4.0 layout_class="mb-4">
            <Title level=2 size=TitleSize::Md>{title}</Title>
            <Text size=TextSize::Sm color="#5d5d5d">{blurb}</Text>
        </Col>
    }
}

#[component]
/// Buttons across colors, variants, sizes, and icon slots.
pub fn ControlsSection() -> impl IntoView {
    let clicks = create_rw_signal(0_u32);
    let locked = create_rw_signal(false);

    let color_row = Color::ALL
        .into_iter()
        .map(|color| {
            view! {
                <Button
                    label=color.token()
                    color=color
                    size=Size::Md
                    on_click_action=Action::new("button.color").with_payload(json!({ "color": color.token() }))
                />
            }
        })
        .collect_view();

    let variant_row = Variant::ALL
        .into_iter()
        .map(|variant| {
            view! { <Button label=variant.token() variant=variant color=Color::Info size=Size::Md /> }
        })
        .collect_view();

    let size_row = Size::ALL
        .into_iter()
        .map(|size| view! { <Button label=size.token() size=size variant=Variant::Soft /> })
        .collect_view();

    view! {
        <section data-gallery-section="controls">
            <SectionHeading
                title="Buttons"
                blurb="Clicking a button without its own handler runs the loading pulse and dispatches an action."
            />
            <Col gap=16.0>
                <Row gap=8.0 wrap=Wrap::Wrap>{color_row}</Row>
                <Row gap=8.0 wrap=Wrap::Wrap>{variant_row}</Row>
                <Row gap=8.0 wrap=Wrap::Wrap align=Align::Center>{size_row}</Row>
                <Row gap=8.0 wrap=Wrap::Wrap align=Align::Center>
                    <Button label="Create" icon_start=IconName::Plus style=StylePreset::Primary />
                    <Button label="Open" icon_end=IconName::ExternalLink style=StylePreset::Secondary />
                    <Button
                        icon_start=IconName::Search
                        uniform=true
                        aria_label="Search"
                        variant=Variant::Ghost
                    />
                    <Button pill=false variant=Variant::Outline>
                        <Icon name=IconName::Star size=IconSize::Sm />
                        "Custom content"
                    </Button>
                </Row>
                <Row gap=8.0 align=Align::Center>
                    <Button
                        label="Count clicks"
                        color=Color::Success
                        on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
                    />
                    <Text size=TextSize::Sm>{move || format!("Clicked {} times", clicks.get())}</Text>
                    <Spacer />
                    <Checkbox
                        label="Lock"
                        on_change=Callback::new(move |checked: bool| locked.set(checked))
                    />
                    <Button label="Lockable" disabled=locked />
                </Row>
                <Button label="Full width" block=true color=Color::Discovery />
            </Col>
        </section>
    }
}

#[component]
/// Select, date picker, text fields, choice controls, and a submitting form.
pub fn PickersSection() -> impl IntoView {
    let chosen_size = create_rw_signal::<Option<String>>(Some("md".to_string()));
    let chosen_date = create_rw_signal::<Option<String>>(None);
    let display_name = create_rw_signal("Ada".to_string());

    view! {
        <section data-gallery-section="pickers">
            <SectionHeading
                title="Pickers & forms"
                blurb="Popovers close on Escape or an outside click. The form submits every named control as one action."
            />
            <Row gap=24.0 wrap=Wrap::Wrap align=Align::Start>
                <Col span=6 gap=12.0>
                    <Select
                        options=size_options()
                        value="md"
                        clearable=true
                        aria_label="Size"
                        on_change=Callback::new(move |value: Option<String>| chosen_size.set(value))
                    />
                    <Caption>
                        {move || chosen_size.get().unwrap_or_else(|| "nothing selected".to_string())}
                    </Caption>
                    <Select
                        options=size_options()
                        variant=Variant::Solid
                        pill=true
                        on_change_action=Action::new("select.size")
                    />
                    <DatePicker
                        min="2026-01-01"
                        max="2026-12-31"
                        clearable=true
                        on_change=Callback::new(move |date: Option<NaiveDate>| {
                            chosen_date.set(date.map(|date| date.to_string()));
                        })
                    />
                    <Caption>
                        {move || chosen_date.get().unwrap_or_else(|| "no date".to_string())}
                    </Caption>
                    <DatePicker value="not-a-date" disabled=true />
                </Col>
                <Col span=6>
                    <Form on_submit_action=Action::new("profile.save") gap=12.0>
                        <Input
                            name="display_name"
                            label="Display name"
                            value=display_name
                            required=true
                            on_input=Callback::new(move |value: String| display_name.set(value))
                        />
                        <Input
                            name="email"
                            input_type="email"
                            label="Email"
                            placeholder="ada@example.com"
                            helper_text="Used for receipts only."
                        />
                        <Input
                            name="team"
                            label="Team"
                            error=Signal::derive(move || display_name.with(String::is_empty))
                            helper_text="A display name is required."
                        />
                        <Textarea name="bio" label="Bio" rows=4 placeholder="A sentence or two" />
                        <Select name="size" options=size_options() placeholder="Preferred size" block=true />
                        <DatePicker name="start" placeholder="Start date" block=true />
                        <RadioGroup
                            name="contact"
                            label="Contact preference"
                            options=contact_options()
                            value="email"
                            direction=Direction::Row
                        />
                        <Checkbox name="newsletter" label="Send the newsletter" checked=true />
                        <Checkbox name="terms" value="accepted" label="I accept the terms" />
                        <Row gap=8.0 justify=Justify::End>
                            <Button label="Submit" submit=true color=Color::Primary size=Size::Md />
                        </Row>
                    </Form>
                </Col>
            </Row>
        </section>
    }
}

#[component]
/// Rows, columns, boxes, spacers, and dividers.
pub fn LayoutSection() -> impl IntoView {
    let swatch = |label: &'static str| {
        view! {
            <LayoutBox padding=12.0 background="#e8e8e8" radius=8.0>
                <Text size=TextSize::Sm align=TextAlign::Center>{label}</Text>
            </LayoutBox>
        }
    };

    let inset = Spacing::Sides {
        top: Some(8.0),
        right: Some(24.0),
        bottom: Some(8.0),
        left: Some(24.0),
    };

    view! {
        <section data-gallery-section="layout">
            <SectionHeading
                title="Layout"
                blurb="Flex containers resolve tokens to utility classes and everything else to inline styles."
            />
            <Col gap=16.0>
                <Row gap=8.0 justify=Justify::Between align=Align::Center border=Border::Width(1.0) radius=Radius::Md padding=12.0>
                    {swatch("start")}
                    {swatch("between")}
                    {swatch("end")}
                </Row>
                <Row gap=8.0>
                    <Col span=4>{swatch("span 4")}</Col>
                    <Col span=8>{swatch("span 8")}</Col>
                </Row>
                <Row gap=8.0 background="surface" padding=inset>
                    {swatch("left")}
                    <Spacer min_size=16.0 />
                    {swatch("pushed right")}
                </Row>
                <Row max_width="32rem" aspect_ratio="16 / 9" background="#f5f5f5" radius=Radius::Lg align=Align::Center justify=Justify::Center>
                    <Caption>"16 / 9"</Caption>
                </Row>
                <Divider />
                <Divider label="or" />
                <Divider color="#ff5f40" thickness=2.0 spacing=24.0 />
                <Row gap=8.0 height=48.0 align=Align::Center>
                    {swatch("a")}
                    <Divider orientation=Orientation::Vertical flush=true />
                    {swatch("b")}
                </Row>
            </Col>
        </section>
    }
}

#[component]
/// Headings, body text, captions, labels, badges, icons, and markdown.
pub fn TypographySection() -> impl IntoView {
    let badges = BadgeVariant::ALL
        .into_iter()
        .flat_map(|variant| {
            [Color::Info, Color::Success, Color::Danger]
                .into_iter()
                .map(move |color| view! { <Badge color=color variant=variant label=color.token() /> })
        })
        .collect_view();

    let icons = IconName::ALL
        .iter()
        .take(12)
        .map(|name| view! { <Icon name=*name size=IconSize::Md /> })
        .collect_view();

    view! {
        <section data-gallery-section="typography">
            <SectionHeading
                title="Typography"
                blurb="Heading level and visual size are independent."
            />
            <Col gap=12.0>
                <Title level=1 size=TitleSize::Xl>"Extra large, level 1"</Title>
                <Title level=3 size=TitleSize::Lg align=TextAlign::Center>"Large, level 3"</Title>
                <Title level=9 size=TitleSize::Sm>"Out-of-range level clamps to h6"</Title>
                <Text size=TextSize::Lg weight=Weight::Semibold>"Large semibold text"</Text>
                <Text align=TextAlign::Justify>
                    "Body copy uses the medium size and normal weight unless told otherwise."
                </Text>
                <Caption>"Captions annotate."</Caption>
                <Label html_for="gallery-email" required=true>"Email"</Label>
                <Row gap=6.0 wrap=Wrap::Wrap>{badges}</Row>
                <Row gap=6.0 align=Align::Center>
                    <Badge size=Size::Md pill=false>"Square"</Badge>
                    <Badge size=Size::Lg color=Color::Warning variant=BadgeVariant::Soft>
                        <Icon name=IconName::Bolt size=IconSize::Sm />
                        "With icon"
                    </Badge>
                </Row>
                <Row gap=8.0 wrap=Wrap::Wrap>
                    {icons}
                    <IconByName name="sparkle-double" size=IconSize::Xl />
                    <IconByName name="not-an-icon" />
                </Row>
                <Markdown content=RELEASE_NOTES.to_string() />
            </Col>
        </section>
    }
}

#[component]
/// Charts, images, and transitions.
pub fn ContentSection() -> impl IntoView {
    let visible = create_rw_signal(true);
    let kind = create_rw_signal(TransitionKind::Fade);
    let image_failures = create_rw_signal(0_u32);

    let charts = ChartKind::ALL
        .into_iter()
        .map(|chart_kind| {
            view! {
                <Col span=3>
                    <Chart data=traffic() kind=chart_kind height_px=160 title=chart_kind.token() />
                </Col>
            }
        })
        .collect_view();

    let kind_options = TransitionKind::ALL
        .into_iter()
        .map(|kind| SelectOption::new(kind.token(), kind.token()))
        .collect::<Vec<_>>();

    view! {
        <section data-gallery-section="content">
            <SectionHeading
                title="Content"
                blurb="Charts draw with plain markup and SVG. Images fall back once, then show a placeholder."
            />
            <Col gap=24.0>
                <Row gap=16.0 wrap=Wrap::Wrap>{charts}</Row>
                <Chart data=Vec::new() title="Empty data" height_px=80 />
                <Row gap=16.0 wrap=Wrap::Wrap>
                    <Image src="https://picsum.photos/240/160" alt="Landscape" width=240.0 height=160.0 radius=12.0 />
                    <Image
                        src="/missing.png"
                        fallback_src="https://picsum.photos/seed/fallback/240/160"
                        alt="Recovered by fallback"
                        width=240.0
                        height=160.0
                    />
                    <Image
                        src="/missing.png"
                        alt="Unavailable"
                        width=240.0
                        height=160.0
                        on_error=Callback::new(move |_| image_failures.update(|count| *count += 1))
                    />
                </Row>
                <Caption>{move || format!("Images that gave up: {}", image_failures.get())}</Caption>
                <Row gap=8.0 align=Align::Center>
                    <Button
                        label="Toggle"
                        icon_start=IconName::Play
                        size=Size::Md
                        on_click=Callback::new(move |_| visible.update(|shown| *shown = !*shown))
                    />
                    <Select
                        options=kind_options
                        value="fade"
                        on_change=Callback::new(move |value: Option<String>| {
                            let parsed = TransitionKind::ALL
                                .into_iter()
                                .find(|candidate| Some(candidate.token()) == value.as_deref());
                            kind.set(parsed.unwrap_or_default());
                        })
                    />
                </Row>
                {move || {
                    let kind = kind.get();
                    view! {
                        <Transition show=visible kind=kind duration_ms=250>
                            <LayoutBox padding=16.0 background="#eef6ff" radius=12.0>
                                <Text>{format!("{} transition", kind.token())}</Text>
                            </LayoutBox>
                        </Transition>
                    }
                }}
            </Col>
        </section>
    }
}
