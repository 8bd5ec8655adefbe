use super::*;
use crate::core::{BuildState, Channel, EndSite, Joint, Node};
use crate::util::{offset, Error, ErrorKind};

fn two_channel_root() -> Node {
    Joint::new("Root", offset(1.0, 2.0, 1.0))
        .with_channels([Channel::Xrotation, Channel::Xrotation])
        .with_child(EndSite::new(offset(1.0, 2.0, -1.0)))
        .into_root()
}

#[test]
fn test_header_build_requires_hierarchy() {
    let mut builder = BvhBuilder::new();
    let err = builder.header().build().unwrap_err();
    assert!(matches!(err, Error::NoHierarchy));
    assert_eq!(err.kind(), ErrorKind::State);
}

#[test]
fn test_null_hierarchy() {
    let mut builder = BvhBuilder::new();
    let err = builder.header().set_hierarchy_from(None).unwrap_err();
    assert!(matches!(err, Error::NullHierarchy));
    assert_eq!(builder.state(), BuildState::Empty);
}

#[test]
fn test_set_hierarchy_from_present_root() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    let root = two_channel_root();
    builder.header().set_hierarchy_from(Some(&root))?;
    assert_eq!(builder.header().channel_count(), Some(2));
    Ok(())
}

#[test]
fn test_set_hierarchy_records_channel_count() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    assert_eq!(builder.header().channel_count(), None);

    builder.header().set_hierarchy(&two_channel_root())?;
    assert_eq!(builder.header().channel_count(), Some(2));
    assert_eq!(builder.header().hierarchy(), Some(two_channel_root()));
    assert_eq!(builder.state(), BuildState::HierarchySet);
    Ok(())
}

#[test]
fn test_rejected_hierarchy_keeps_previous() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;

    let bad = Joint::new("", offset(0.0, 0.0, 0.0))
        .with_child(EndSite::default())
        .into_root();
    assert!(builder.header().set_hierarchy(&bad).is_err());

    assert_eq!(builder.header().hierarchy(), Some(two_channel_root()));
    assert_eq!(builder.header().channel_count(), Some(2));
    Ok(())
}

#[test]
fn test_hierarchy_replaceable_before_motion() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;

    let wider = Joint::new("Hips", offset(0.0, 0.0, 0.0))
        .with_channels(Channel::ALL)
        .with_child(EndSite::default())
        .into_root();
    builder.header().set_hierarchy(&wider)?;
    assert_eq!(builder.header().channel_count(), Some(6));
    assert!(builder.header().build()?.contains("ROOT Hips"));
    Ok(())
}

#[test]
fn test_motion_gated_on_hierarchy() {
    let mut builder = BvhBuilder::new();
    let err = builder.motion().unwrap_err();
    assert!(matches!(err, Error::NoHierarchyForMotion));
    assert_eq!(err.kind(), ErrorKind::Sequencing);
}

#[test]
fn test_motion_init_without_hierarchy_rejected() {
    let context = std::rc::Rc::new(std::cell::RefCell::new(crate::core::BuildContext::new()));
    let mut motion = MotionBuilder::new(context);
    assert!(matches!(motion.init(0.1), Err(Error::NoHierarchyForMotion)));
    assert_eq!(motion.period(), None);
}

#[test]
fn test_motion_lifecycle() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;

    let motion = builder.motion()?;
    assert!(matches!(motion.add_frame([0.0, 1.0]), Err(Error::MotionNotInitialized)));
    assert!(matches!(motion.build(), Err(Error::MotionNotInitialized)));

    motion.init(0.013)?;
    assert!(matches!(motion.init(0.02), Err(Error::MotionAlreadyInitialized)));
    assert_eq!(motion.period(), Some(0.013));
    assert!(matches!(motion.build(), Err(Error::NoFrames)));

    motion.add_frame([0.0, 1.0])?.add_frame(vec![2.0, -3.0])?;
    assert_eq!(motion.frame_count(), 2);
    assert_eq!(builder.state(), BuildState::FramesAdded);
    Ok(())
}

#[test]
fn test_invalid_period() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;
    let motion = builder.motion()?;

    for period in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let err = motion.init(period).unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    // Rejected periods leave motion uninitialized
    motion.init(0.5)?;
    Ok(())
}

#[test]
fn test_frame_arity() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;
    let motion = builder.motion()?.init(0.1)?;

    let err = motion.add_frame([0.0, 1.0, -2.0]).unwrap_err();
    assert!(matches!(err, Error::ArityMismatch { expected: 2, actual: 3 }));
    assert!(matches!(motion.add_frame([0.0]), Err(Error::ArityMismatch { .. })));
    assert!(matches!(motion.add_frame(Vec::<f64>::new()), Err(Error::ArityMismatch { .. })));
    assert_eq!(motion.frame_count(), 0);
    Ok(())
}

#[test]
fn test_non_finite_values() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;
    let motion = builder.motion()?.init(0.1)?;

    assert!(matches!(
        motion.add_frame([0.0, f64::NAN]),
        Err(Error::NonNumericValue { index: 1, .. })
    ));
    assert!(matches!(
        motion.add_frame([f64::NEG_INFINITY, 0.0]),
        Err(Error::NonNumericValue { index: 0, .. })
    ));
    assert_eq!(motion.frame_count(), 0);
    Ok(())
}

#[test]
fn test_hierarchy_frozen_after_init() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;
    builder.motion()?.init(0.1)?;

    let err = builder.header().set_hierarchy(&two_channel_root()).unwrap_err();
    assert!(matches!(err, Error::HierarchyFrozen));
    // Sequencing is checked before the input itself
    assert!(matches!(
        builder.header().set_hierarchy_from(None),
        Err(Error::HierarchyFrozen)
    ));
    assert_eq!(builder.state(), BuildState::MotionInitialized);
    Ok(())
}

#[test]
fn test_build_errors_in_order() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    assert!(matches!(builder.build(), Err(Error::NoHierarchy)));

    builder.header().set_hierarchy(&two_channel_root())?;
    assert!(matches!(builder.build(), Err(Error::MotionNotInitialized)));

    builder.motion()?.init(0.1)?;
    assert!(matches!(builder.build(), Err(Error::NoFrames)));

    builder.motion()?.add_frame([1.0, 2.0])?;
    assert!(builder.build().is_ok());
    Ok(())
}

#[test]
fn test_motion_block_format() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;
    builder
        .motion()?
        .init(1.0 / 30.0)?
        .add_frame([0.0, -0.5])?
        .add_frame([10.25, 3.0])?;

    let text = builder.motion()?.build()?;
    assert_eq!(
        text,
        "MOTION\nFrames: 2\nFrame Time: 0.0333\n 0.00\t-0.50\t\n 10.25\t 3.00\t\n"
    );
    Ok(())
}

#[test]
fn test_motion_block_rounds_ties_up() -> crate::util::Result<()> {
    let mut builder = BvhBuilder::new();
    builder.header().set_hierarchy(&two_channel_root())?;
    builder
        .motion()?
        .init(1.0 / 32.0)?
        .add_frame([0.125, -0.375])?;

    let text = builder.motion()?.build()?;
    assert_eq!(text, "MOTION\nFrames: 1\nFrame Time: 0.0313\n 0.13\t-0.38\t\n");
    Ok(())
}
