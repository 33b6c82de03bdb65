#![allow(incomplete_features)]
#![feature(adt_const_params)]

use std::any::TypeId;
use std::mem::{size_of, size_of_val};
use const_value::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, std::marker::ConstParamTy, ConstParam)]
pub struct Point {
    x: i32,
    y: i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, std::marker::ConstParamTy, ConstParam)]
pub enum Mode {
    Fast,
    Careful { retries: u8 }
}

const ORIGIN: Point = Point { x: 0, y: 0 };
const FORTY_TWO: u32 = value_of(const_v!(42u32));

fn same_type<T> (_: T, _: T) {}

fn type_of<T: 'static> (_: T) -> TypeId {
    return TypeId::of::<T>()
}

fn sum<A: ConstValue<Type = u32>, B: ConstValue<Type = u32>> (_: (A, B)) -> u32 {
    return A::VALUE + B::VALUE
}

#[test]
fn lifting_an_integer () {
    type Answer = const_t!(42);

    assert_eq!(<Answer as ConstValue>::VALUE, 42);
    assert_eq!(TypeId::of::<<Answer as ConstValue>::Type>(), TypeId::of::<i32>());
    assert_eq!(TypeId::of::<Answer>(), TypeId::of::<ConstI32<42>>());
    assert!(is_const_value::<Answer>());
}

#[test]
fn same_value_same_type () {
    same_type(const_v!(true), const_v!(true));
    assert_eq!(type_of(const_v!(true)), type_of(const_v!(true)));
    assert_ne!(type_of(const_v!(true)), type_of(const_v!(false)));
    assert_eq!(TypeId::of::<const_t!(7u8)>(), TypeId::of::<const_t!(u8 = 3 + 4)>());
    assert_eq!(TypeId::of::<const_t!(Point = ORIGIN)>(), TypeId::of::<const_t!(Point = Point { x: 0, y: 0 })>());
}

#[test]
fn same_value_different_type () {
    assert_ne!(TypeId::of::<const_t!(1u8)>(), TypeId::of::<const_t!(1i8)>());
    assert_ne!(TypeId::of::<const_t!(1u32)>(), TypeId::of::<const_t!(1u64)>());
    assert_ne!(TypeId::of::<const_t!(b'a')>(), TypeId::of::<const_t!('a')>());
}

#[test]
fn round_trip_of_builtins () {
    assert_eq!(<const_t!(false) as ConstValue>::VALUE, false);
    assert_eq!(<const_t!('λ') as ConstValue>::VALUE, 'λ');
    assert_eq!(<const_t!(b'q') as ConstValue>::VALUE, b'q');
    assert_eq!(<const_t!(-128i8) as ConstValue>::VALUE, i8::MIN);
    assert_eq!(<const_t!(u16 = u16::MAX) as ConstValue>::VALUE, u16::MAX);
    assert_eq!(<const_t!(i64 = -1 << 40) as ConstValue>::VALUE, -1 << 40);
    assert_eq!(<const_t!(u128 = u128::MAX) as ConstValue>::VALUE, u128::MAX);
    assert_eq!(<const_t!(i128 = i128::MIN) as ConstValue>::VALUE, i128::MIN);
    assert_eq!(<const_t!(usize = usize::MAX) as ConstValue>::VALUE, usize::MAX);
    assert_eq!(<const_t!(-1isize) as ConstValue>::VALUE, -1);

    assert_eq!(TypeId::of::<<const_t!('λ') as ConstValue>::Type>(), TypeId::of::<char>());
    assert_eq!(TypeId::of::<<const_t!(usize = 0) as ConstValue>::Type>(), TypeId::of::<usize>());
}

#[test]
fn instance_accessors () {
    assert_eq!(const_v!(5u16).get(), 5);
    assert_eq!(const_v!(5u16).value(), 5);
    assert_eq!(value_of(const_v!('k')), 'k');
    assert_eq!(ConstU64::<9>::VALUE, 9);
    assert_eq!(FORTY_TWO, 42);
}

mod reexport {
    pub use const_value as lift;
}

#[test]
fn lifting_through_a_reexport () {
    type Seven = const_t!(crate = reexport::lift; 7u8);

    assert_eq!(TypeId::of::<Seven>(), TypeId::of::<ConstU8<7>>());
    assert_eq!(const_v!(crate = crate::reexport::lift; bool = !false).get(), true);
    assert_eq!(const_value::to_constexpr!(crate = reexport::lift; 'r').value(), 'r');
}

#[test]
fn lifting_an_aggregate () {
    type Corner = const_t!(Point = Point { x: 3, y: -4 });
    let point = <Corner as ConstValue>::VALUE;

    assert_eq!(point.x, 3);
    assert_eq!(point.y, -4);
    assert_eq!(point, Point { x: 3, y: -4 });
    assert_eq!(TypeId::of::<<Corner as ConstValue>::Type>(), TypeId::of::<Point>());
    assert_eq!(TypeId::of::<Corner>(), TypeId::of::<ConstPoint<{ Point { x: 3, y: -4 } }>>());
    assert_ne!(TypeId::of::<Corner>(), TypeId::of::<const_t!(Point = ORIGIN)>());
    assert_eq!(ConstPoint::<{ ORIGIN }>::VALUE, ORIGIN);
    assert_eq!(const_v!(Point = ORIGIN).get(), ORIGIN);
    assert!(is_const_value::<Corner>());
}

#[test]
fn lifting_an_enum () {
    type Careful = const_t!(Mode = Mode::Careful { retries: 3 });

    assert_eq!(<Careful as ConstValue>::VALUE, Mode::Careful { retries: 3 });
    assert_eq!(const_v!(Mode = Mode::Fast).value(), Mode::Fast);
    assert_ne!(TypeId::of::<Careful>(), TypeId::of::<const_t!(Mode = Mode::Careful { retries: 4 })>());
}

#[test]
fn several_values_compose_as_tuples () {
    assert_eq!(sum((const_v!(40u32), const_v!(2u32))), 42);
    assert_eq!(sum((const_v!(u32 = FORTY_TWO), const_v!(0u32))), 42);
}

#[test]
fn lifted_constants_are_zero_sized () {
    assert_eq!(size_of::<const_t!(42)>(), 0);
    assert_eq!(size_of::<const_t!(u128 = u128::MAX)>(), 0);
    assert_eq!(size_of::<ConstPoint<{ ORIGIN }>>(), 0);
    assert_eq!(size_of_val(&const_v!(Mode = Mode::Fast)), 0);
    assert_eq!(size_of::<(const_t!(1u8), const_t!('c'))>(), 0);
}
